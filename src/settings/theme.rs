use crate::domain::Theme;
use crate::settings::SettingsModel;

/// Active theme for one run of the reader.
///
/// The system preference is captured once when loading. Once the reader
/// toggles, the explicit choice is saved and wins on every later load.
pub struct ThemeController {
    settings: SettingsModel,
    current: Theme,
    explicit: bool,
}

impl ThemeController {
    pub async fn load(settings: SettingsModel, system: Theme) -> Self {
        let saved = settings.theme().await;
        let current = saved.unwrap_or(system);
        tracing::debug!(
            "Theme resolved to {} ({})",
            current,
            if saved.is_some() { "saved" } else { "system" }
        );

        Self {
            settings,
            current,
            explicit: saved.is_some(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether the current theme came from an explicit choice.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub async fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled()).await
    }

    pub async fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.explicit = true;
        self.settings.save_theme(theme).await;
        theme
    }
}
