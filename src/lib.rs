//! # Mushaf
//!
//! A Quran reader core that remembers where you stopped.
//!
//! ## Architecture
//!
//! ```text
//! KeyValueStore → SettingsModel / ReadingPositionTracker → LaunchSequence → ReadingSession
//!                                    ContentIndex ───────────┘
//! ```
//!
//! Settings and the last-read position are read concurrently at launch,
//! the chosen language selects a dataset, and the stored position becomes
//! the first view. While reading, visibility events write the position back.
//! Storage failures never reach the reader: every getter degrades to its
//! default and every saver logs and moves on.
//!
//! ## Quick Start
//!
//! ```bash
//! # Continue where you left off
//! mushaf resume
//!
//! # Open Al-Baqarah at the Throne Verse
//! mushaf read 2 --verse 255
//!
//! # Change settings
//! mushaf settings font -2
//! mushaf settings theme toggle
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the store,
/// the content index, settings and the position tracker.
pub mod app;

/// Command-line interface using clap.
///
/// - `resume` - Continue from the last-read verse
/// - `read <chapter>` - Open a chapter
/// - `seen <verse>` - Record a visible verse
/// - `chapters` - List chapters
/// - `settings` - Show or change settings
pub mod cli;

/// Configuration loaded from `~/.config/mushaf/config.toml`.
pub mod config;

/// Static chapter and verse dataset.
///
/// - [`ContentIndex`](content::ContentIndex): per-language chapter index and records
pub mod content;

/// Core domain models.
///
/// - [`ReadingPosition`](domain::ReadingPosition): chapter and verse last seen
/// - [`Settings`](domain::Settings): reader preferences
/// - [`ChapterRecord`](domain::ChapterRecord): a chapter with its verses
pub mod domain;

/// Localized UI strings.
pub mod i18n;

/// Launch-time resolution of the initial view.
pub mod launch;

/// Last-read position persistence.
pub mod position;

/// Per-chapter reading state and visibility-driven position updates.
pub mod session;

/// Reader settings persistence.
pub mod settings;

/// Key-value persistence.
///
/// - [`KeyValueStore`](store::KeyValueStore): async storage capability
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`MemoryStore`](store::MemoryStore): in-process implementation
pub mod store;
