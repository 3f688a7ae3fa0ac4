pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{Language, QuranStyle, Theme};

#[derive(Parser)]
#[command(name = "mushaf")]
#[command(about = "A terminal Quran reader that remembers where you stopped", long_about = None)]
pub struct Cli {
    /// SQLite database holding settings and the last-read position
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Dataset root with one directory per language
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Color scheme of the host, used until a theme is chosen
    #[arg(long, global = true)]
    pub system_theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Continue from the last-read verse
    Resume {
        /// Number of verses to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Open a chapter
    Read {
        /// Chapter number (1-114)
        chapter: u16,
        /// Verse to jump to
        #[arg(short, long, default_value_t = 1)]
        verse: u16,
        /// Number of verses to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Mark a verse of the current chapter as seen
    Seen {
        /// Verse number
        verse: u16,
    },
    /// List all chapters
    Chapters,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,
    /// Set the translation language (en, bn, es, fr, id, ru, sv, tr, ur, zh)
    Language { language: Language },
    /// Grow or shrink the reading font, e.g. `2` or `-2`
    Font {
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Show or hide transliteration
    Transliteration { state: Switch },
    /// Arabic script style (uthmani, indopak)
    Style { style: QuranStyle },
    /// Pick light or dark, or flip the current one
    Theme { choice: ThemeChoice },
    /// Forget all settings
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}
