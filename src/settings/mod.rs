//! Reader settings persisted one key per field.
//!
//! Every getter degrades to the documented default on a missing key, an
//! unreadable value or a storage failure. Every saver logs failures and
//! returns nothing, so a broken store never reaches the reader.

pub mod theme;

use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{Language, QuranStyle, Settings, Theme, DEFAULT_FONT_SIZE};
use crate::store::KeyValueStore;

pub use theme::ThemeController;

pub const FONT_SIZE_KEY: &str = "@quran_font_size";
pub const LANGUAGE_KEY: &str = "@quran_language";
pub const SHOW_TRANSLITERATION_KEY: &str = "@quran_show_transliteration";
pub const QURAN_STYLE_KEY: &str = "@quran_style";
pub const THEME_KEY: &str = "@quran_theme";

const ALL_KEYS: [&str; 5] = [
    FONT_SIZE_KEY,
    LANGUAGE_KEY,
    SHOW_TRANSLITERATION_KEY,
    QURAN_STYLE_KEY,
    THEME_KEY,
];

#[derive(Clone)]
pub struct SettingsModel {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsModel {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn language(&self) -> Language {
        self.read_raw(LANGUAGE_KEY).await.unwrap_or_default()
    }

    pub async fn save_language(&self, language: Language) {
        self.write(LANGUAGE_KEY, language.code()).await;
    }

    pub async fn font_size(&self) -> u32 {
        self.read_json(FONT_SIZE_KEY)
            .await
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Stores `size` as given; see [`crate::domain::adjust_font_size`].
    pub async fn save_font_size(&self, size: u32) {
        self.write(FONT_SIZE_KEY, &size.to_string()).await;
    }

    pub async fn show_transliteration(&self) -> bool {
        self.read_json(SHOW_TRANSLITERATION_KEY)
            .await
            .unwrap_or(true)
    }

    pub async fn save_show_transliteration(&self, show: bool) {
        self.write(SHOW_TRANSLITERATION_KEY, &show.to_string()).await;
    }

    pub async fn quran_style(&self) -> QuranStyle {
        self.read_raw(QURAN_STYLE_KEY).await.unwrap_or_default()
    }

    pub async fn save_quran_style(&self, style: QuranStyle) {
        self.write(QURAN_STYLE_KEY, style.as_str()).await;
    }

    /// The explicitly chosen theme, if the reader ever picked one.
    pub async fn theme(&self) -> Option<Theme> {
        self.read_raw(THEME_KEY).await
    }

    pub async fn save_theme(&self, theme: Theme) {
        self.write(THEME_KEY, theme.as_str()).await;
    }

    /// Saved theme, or `system` when none was ever saved.
    pub async fn resolve_theme(&self, system: Theme) -> Theme {
        self.theme().await.unwrap_or(system)
    }

    /// Read every field concurrently.
    pub async fn snapshot(&self) -> Settings {
        let (language, font_size, show_transliteration, quran_style, theme) = futures::join!(
            self.language(),
            self.font_size(),
            self.show_transliteration(),
            self.quran_style(),
            self.theme(),
        );

        Settings {
            language,
            font_size,
            show_transliteration,
            quran_style,
            theme,
        }
    }

    /// Forget every stored setting so the defaults apply again.
    pub async fn reset(&self) {
        for key in ALL_KEYS {
            if let Err(e) = self.store.remove(key).await {
                tracing::error!("Error resetting {}: {}", key, e);
            }
        }
    }

    async fn fetch(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Error getting {}: {}", key, e);
                None
            }
        }
    }

    async fn read_raw<T: FromStr<Err = String>>(&self, key: &str) -> Option<T> {
        let value = self.fetch(key).await?;
        match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Ignoring stored {}: {}", key, e);
                None
            }
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.fetch(key).await?;
        match serde_json::from_str(&value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Ignoring stored {}: {}", key, e);
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value).await {
            tracing::error!("Error saving {}: {}", key, e);
        }
    }
}
