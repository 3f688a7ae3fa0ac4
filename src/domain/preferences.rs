use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: u32 = 18;
pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 40;

/// Translation languages with a bundled dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
    Es,
    Fr,
    Id,
    Ru,
    Sv,
    Tr,
    Ur,
    Zh,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Bn,
        Language::Es,
        Language::Fr,
        Language::Id,
        Language::Ru,
        Language::Sv,
        Language::Tr,
        Language::Ur,
        Language::Zh,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Id => "id",
            Language::Ru => "ru",
            Language::Sv => "sv",
            Language::Tr => "tr",
            Language::Ur => "ur",
            Language::Zh => "zh",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Bn => "বাংলা",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::Id => "Bahasa Indonesia",
            Language::Ru => "Русский",
            Language::Sv => "Svenska",
            Language::Tr => "Türkçe",
            Language::Ur => "اردو",
            Language::Zh => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

/// Script rendering of the Arabic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuranStyle {
    #[default]
    Uthmani,
    IndoPak,
}

impl QuranStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            QuranStyle::Uthmani => "Uthmani",
            QuranStyle::IndoPak => "IndoPak",
        }
    }
}

impl fmt::Display for QuranStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuranStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uthmani" => Ok(QuranStyle::Uthmani),
            "indopak" => Ok(QuranStyle::IndoPak),
            _ => Err(format!("Unknown Quran style: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Resolved reader settings. `theme` is `None` until the reader picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    pub font_size: u32,
    pub show_transliteration: bool,
    pub quran_style: QuranStyle,
    pub theme: Option<Theme>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            font_size: DEFAULT_FONT_SIZE,
            show_transliteration: true,
            quran_style: QuranStyle::default(),
            theme: None,
        }
    }
}

/// Apply a font size step, keeping the result readable.
pub fn adjust_font_size(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(MIN_FONT_SIZE), i64::from(MAX_FONT_SIZE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(
            "IndoPak".parse::<QuranStyle>().unwrap(),
            QuranStyle::IndoPak
        );
        assert_eq!(
            "uthmani".parse::<QuranStyle>().unwrap(),
            QuranStyle::Uthmani
        );
        assert!("naskh".parse::<QuranStyle>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_font_size_never_leaves_range() {
        let mut size = DEFAULT_FONT_SIZE;
        for _ in 0..20 {
            size = adjust_font_size(size, -2);
            assert!(size >= MIN_FONT_SIZE);
        }
        assert_eq!(size, MIN_FONT_SIZE);

        for _ in 0..20 {
            size = adjust_font_size(size, 2);
            assert!(size <= MAX_FONT_SIZE);
        }
        assert_eq!(size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_font_size_clamps_out_of_range_current() {
        assert_eq!(adjust_font_size(100, 2), MAX_FONT_SIZE);
        assert_eq!(adjust_font_size(0, -2), MIN_FONT_SIZE);
    }
}
