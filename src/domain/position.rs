use serde::{Deserialize, Deserializer, Serialize};

/// Last verse confirmed visible to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPosition {
    #[serde(deserialize_with = "lenient_id")]
    pub chapter_id: u16,
    #[serde(default = "first_verse", deserialize_with = "lenient_id")]
    pub verse_id: u16,
}

impl ReadingPosition {
    pub fn new(chapter_id: u16, verse_id: u16) -> Self {
        Self {
            chapter_id,
            verse_id,
        }
    }

    /// Start of a chapter.
    pub fn chapter_start(chapter_id: u16) -> Self {
        Self::new(chapter_id, 1)
    }
}

impl Default for ReadingPosition {
    fn default() -> Self {
        Self::chapter_start(1)
    }
}

fn first_verse() -> u16 {
    1
}

// Older builds wrote ids as strings in some paths.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u16),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Number(n) => Ok(n),
        Id::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Encodings accepted for the last-read key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredPosition {
    Position(ReadingPosition),
    /// Chapter-only format written before verse tracking existed.
    Legacy(u16),
}

impl From<StoredPosition> for ReadingPosition {
    fn from(stored: StoredPosition) -> Self {
        match stored {
            StoredPosition::Position(position) => position,
            StoredPosition::Legacy(chapter_id) => ReadingPosition::chapter_start(chapter_id),
        }
    }
}
