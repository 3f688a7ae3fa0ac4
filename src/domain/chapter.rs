use serde::{Deserialize, Serialize};

use crate::app::{MushafError, Result};

pub const CHAPTER_COUNT: u16 = 114;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub id: u16,
    /// Name in Arabic script.
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(alias = "total_verses")]
    pub total_verses: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub id: u16,
    pub text: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    pub id: u16,
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(alias = "total_verses")]
    pub total_verses: u16,
    pub verses: Vec<VerseRecord>,
}

impl ChapterRecord {
    pub fn summary(&self) -> ChapterSummary {
        ChapterSummary {
            id: self.id,
            name: self.name.clone(),
            transliteration: self.transliteration.clone(),
            translation: self.translation.clone(),
            total_verses: self.total_verses,
        }
    }

    pub fn verse(&self, verse_id: u16) -> Option<&VerseRecord> {
        // Ids are contiguous from 1, so the id doubles as an index.
        let index = usize::from(verse_id).checked_sub(1)?;
        self.verses.get(index)
    }

    pub fn contains_verse(&self, verse_id: u16) -> bool {
        self.verse(verse_id).is_some()
    }

    /// Verses from `verse_id` to the end of the chapter.
    pub fn verses_from(&self, verse_id: u16) -> &[VerseRecord] {
        let start = usize::from(verse_id.max(1)) - 1;
        self.verses.get(start..).unwrap_or(&[])
    }

    /// Check that verse ids run 1..=total_verses without gaps.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 || self.id > CHAPTER_COUNT {
            return Err(MushafError::ContentInvalid(format!(
                "chapter id {} outside 1..={}",
                self.id, CHAPTER_COUNT
            )));
        }

        if self.verses.len() != usize::from(self.total_verses) {
            return Err(MushafError::ContentInvalid(format!(
                "chapter {} declares {} verses but has {}",
                self.id,
                self.total_verses,
                self.verses.len()
            )));
        }

        for (index, verse) in self.verses.iter().enumerate() {
            if usize::from(verse.id) != index + 1 {
                return Err(MushafError::ContentInvalid(format!(
                    "chapter {} verse at position {} has id {}",
                    self.id,
                    index + 1,
                    verse.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_chapter(id: u16, total_verses: u16) -> ChapterRecord {
    ChapterRecord {
        id,
        name: format!("سورة {}", id),
        transliteration: format!("Surah {}", id),
        translation: format!("Chapter {}", id),
        total_verses,
        verses: (1..=total_verses)
            .map(|v| VerseRecord {
                id: v,
                text: format!("آية {}", v),
                transliteration: format!("ayah {}", v),
                translation: format!("Verse {} of chapter {}", v, id),
            })
            .collect(),
    }
}
