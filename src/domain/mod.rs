pub mod chapter;
pub mod position;
pub mod preferences;

pub use chapter::{ChapterRecord, ChapterSummary, VerseRecord, CHAPTER_COUNT};
pub use position::{ReadingPosition, StoredPosition};
pub use preferences::{
    adjust_font_size, Language, QuranStyle, Settings, Theme, DEFAULT_FONT_SIZE, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
