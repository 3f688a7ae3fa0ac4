//! Read-only chapter and verse dataset, one pack per language.
//!
//! Datasets live on disk in the layout the reader has always shipped:
//!
//! ```text
//! <data_dir>/<lang>/index.json   # 114 chapter summaries
//! <data_dir>/<lang>/<id>.json    # one chapter with its verses
//! ```
//!
//! Every record is validated against the canonical catalog when loaded,
//! so lookups can rely on contiguous 1-based verse ids.

pub mod catalog;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::app::{MushafError, Result};
use crate::domain::{ChapterRecord, ChapterSummary, Language, CHAPTER_COUNT};

#[derive(Debug, Default)]
struct LanguagePack {
    index: Vec<ChapterSummary>,
    chapters: HashMap<u16, Arc<ChapterRecord>>,
}

#[derive(Debug, Default)]
pub struct ContentIndex {
    packs: HashMap<Language, LanguagePack>,
}

impl ContentIndex {
    /// English chapter catalog without verse text.
    pub fn builtin() -> Self {
        let mut content = Self::default();
        content.packs.insert(
            Language::default(),
            LanguagePack {
                index: catalog::summaries(),
                chapters: HashMap::new(),
            },
        );
        content
    }

    /// Build a single-language index from in-memory chapters. Chapters not
    /// supplied keep their catalog summary but have no verses.
    pub fn from_records(language: Language, records: Vec<ChapterRecord>) -> Result<Self> {
        let mut content = Self::default();
        content.insert_pack(language, None, records)?;
        if !content.packs.contains_key(&Language::default()) {
            content
                .packs
                .insert(Language::default(), Self::builtin_pack());
        }
        Ok(content)
    }

    /// Load every language directory found under `data_dir`.
    pub fn load_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let mut content = Self::default();

        for language in Language::ALL {
            let lang_dir = data_dir.join(language.code());
            if !lang_dir.is_dir() {
                continue;
            }

            let index_path = lang_dir.join("index.json");
            let index = if index_path.exists() {
                let raw = fs::read_to_string(&index_path)?;
                let index: Vec<ChapterSummary> = serde_json::from_str(&raw).map_err(|e| {
                    MushafError::ContentInvalid(format!("{}: {}", index_path.display(), e))
                })?;
                Some(index)
            } else {
                None
            };

            let mut records = Vec::new();
            for chapter_id in 1..=CHAPTER_COUNT {
                let path = lang_dir.join(format!("{}.json", chapter_id));
                if !path.exists() {
                    continue;
                }
                let raw = fs::read_to_string(&path)?;
                let record: ChapterRecord = serde_json::from_str(&raw).map_err(|e| {
                    MushafError::ContentInvalid(format!("{}: {}", path.display(), e))
                })?;
                records.push(record);
            }

            tracing::info!(
                "Loaded {} chapters for language {}",
                records.len(),
                language
            );
            content.insert_pack(language, index, records)?;
        }

        if !content.packs.contains_key(&Language::default()) {
            tracing::warn!(
                "No {} dataset in {}, using built-in catalog",
                Language::default(),
                data_dir.display()
            );
            content
                .packs
                .insert(Language::default(), Self::builtin_pack());
        }

        Ok(content)
    }

    /// Languages with a loaded pack, in [`Language::ALL`] order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.packs.contains_key(lang))
            .collect()
    }

    /// Ordered chapter summaries. Unloaded languages use the default pack.
    pub fn chapter_index(&self, language: Language) -> &[ChapterSummary] {
        self.pack(language)
            .map(|pack| pack.index.as_slice())
            .unwrap_or(&[])
    }

    pub fn summary(&self, language: Language, chapter_id: u16) -> Option<&ChapterSummary> {
        let index = usize::from(chapter_id).checked_sub(1)?;
        self.chapter_index(language).get(index)
    }

    /// Full chapter with verses.
    pub fn chapter(&self, language: Language, chapter_id: u16) -> Result<Arc<ChapterRecord>> {
        if chapter_id == 0 || chapter_id > CHAPTER_COUNT {
            return Err(MushafError::NotFound(format!("chapter {}", chapter_id)));
        }

        self.pack(language)
            .and_then(|pack| pack.chapters.get(&chapter_id))
            .cloned()
            .ok_or_else(|| {
                MushafError::NotFound(format!(
                    "verses of chapter {} for language {}",
                    chapter_id, language
                ))
            })
    }

    fn pack(&self, language: Language) -> Option<&LanguagePack> {
        self.packs.get(&language).or_else(|| {
            tracing::debug!("No dataset for {}, falling back", language);
            self.packs.get(&Language::default())
        })
    }

    fn builtin_pack() -> LanguagePack {
        LanguagePack {
            index: catalog::summaries(),
            chapters: HashMap::new(),
        }
    }

    fn insert_pack(
        &mut self,
        language: Language,
        index: Option<Vec<ChapterSummary>>,
        records: Vec<ChapterRecord>,
    ) -> Result<()> {
        let mut chapters = HashMap::new();
        for record in records {
            record.validate()?;
            check_canonical(record.id, record.total_verses)?;
            chapters.insert(record.id, Arc::new(record));
        }

        let index = match index {
            Some(index) => {
                validate_index(&index)?;
                index
            }
            // Without an index file, summarize what was loaded over the catalog.
            None => catalog::summaries()
                .into_iter()
                .map(|summary| match chapters.get(&summary.id) {
                    Some(record) => record.summary(),
                    None => summary,
                })
                .collect(),
        };

        self.packs
            .insert(language, LanguagePack { index, chapters });
        Ok(())
    }
}

fn check_canonical(chapter_id: u16, total_verses: u16) -> Result<()> {
    match catalog::verse_count(chapter_id) {
        Some(expected) if expected == total_verses => Ok(()),
        Some(expected) => Err(MushafError::ContentInvalid(format!(
            "chapter {} has {} verses, expected {}",
            chapter_id, total_verses, expected
        ))),
        None => Err(MushafError::ContentInvalid(format!(
            "unknown chapter {}",
            chapter_id
        ))),
    }
}

fn validate_index(index: &[ChapterSummary]) -> Result<()> {
    if index.len() != usize::from(CHAPTER_COUNT) {
        return Err(MushafError::ContentInvalid(format!(
            "chapter index has {} entries, expected {}",
            index.len(),
            CHAPTER_COUNT
        )));
    }

    for (summary, id) in index.iter().zip(1u16..) {
        if summary.id != id {
            return Err(MushafError::ContentInvalid(format!(
                "chapter index entry {} has id {}",
                id, summary.id
            )));
        }
        check_canonical(summary.id, summary.total_verses)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chapter::sample_chapter;

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) {
        fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
    }

    #[test]
    fn test_builtin_index() {
        let content = ContentIndex::builtin();
        let index = content.chapter_index(Language::En);
        assert_eq!(index.len(), 114);
        assert_eq!(index[1].total_verses, 286);
        assert_eq!(content.summary(Language::En, 114).unwrap().id, 114);
        assert!(content.summary(Language::En, 0).is_none());
    }

    #[test]
    fn test_unloaded_language_falls_back() {
        let content = ContentIndex::builtin();
        assert_eq!(
            content.chapter_index(Language::Tr),
            content.chapter_index(Language::En)
        );
    }

    #[test]
    fn test_chapter_lookup() {
        let content =
            ContentIndex::from_records(Language::En, vec![sample_chapter(1, 7)]).unwrap();

        let chapter = content.chapter(Language::En, 1).unwrap();
        assert_eq!(chapter.verses.len(), 7);
        let summary = content.summary(Language::En, 1).unwrap();
        assert_eq!(summary.transliteration, "Surah 1");

        // Same input, same shared record.
        let again = content.chapter(Language::En, 1).unwrap();
        assert!(Arc::ptr_eq(&chapter, &again));
    }

    #[test]
    fn test_chapter_not_found() {
        let content =
            ContentIndex::from_records(Language::En, vec![sample_chapter(1, 7)]).unwrap();

        for id in [0, 2, 115, 999] {
            assert!(matches!(
                content.chapter(Language::En, id),
                Err(MushafError::NotFound(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_canonical_verse_count() {
        let result = ContentIndex::from_records(Language::En, vec![sample_chapter(1, 8)]);
        assert!(matches!(result, Err(MushafError::ContentInvalid(_))));
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        let fr = dir.path().join("fr");
        fs::create_dir_all(&en).unwrap();
        fs::create_dir_all(&fr).unwrap();

        write_json(&en.join("index.json"), &catalog::summaries());
        write_json(&en.join("1.json"), &sample_chapter(1, 7));
        write_json(&fr.join("112.json"), &sample_chapter(112, 4));

        let content = ContentIndex::load_dir(dir.path()).unwrap();
        assert_eq!(content.languages(), vec![Language::En, Language::Fr]);
        let en_index = content.chapter_index(Language::En);
        assert_eq!(en_index[0].transliteration, "Al-Fatihah");
        let fr_index = content.chapter_index(Language::Fr);
        assert_eq!(fr_index[111].transliteration, "Surah 112");
        assert!(content.chapter(Language::En, 1).is_ok());
        assert!(content.chapter(Language::Fr, 112).is_ok());
        assert!(content.chapter(Language::Fr, 1).is_err());
    }

    #[test]
    fn test_load_dir_accepts_snake_case_counts() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        fs::create_dir_all(&en).unwrap();
        fs::write(
            en.join("108.json"),
            r#"{"id":108,"name":"الكوثر","transliteration":"Al-Kawthar",
                "translation":"The Abundance","type":"meccan","total_verses":3,
                "verses":[{"id":1,"text":"a","translation":"x"},
                          {"id":2,"text":"b","translation":"y"},
                          {"id":3,"text":"c","translation":"z"}]}"#,
        )
        .unwrap();

        let content = ContentIndex::load_dir(dir.path()).unwrap();
        let chapter = content.chapter(Language::En, 108).unwrap();
        assert_eq!(chapter.total_verses, 3);
        assert_eq!(chapter.verses[2].transliteration, "");
    }

    #[test]
    fn test_load_dir_rejects_bad_index() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        fs::create_dir_all(&en).unwrap();

        let mut index = catalog::summaries();
        index.swap(0, 1);
        write_json(&en.join("index.json"), &index);

        assert!(ContentIndex::load_dir(dir.path()).is_err());
    }

    #[test]
    fn test_load_dir_names_malformed_index() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        fs::create_dir_all(&en).unwrap();
        fs::write(en.join("index.json"), "[{\"id\": 1,").unwrap();

        match ContentIndex::load_dir(dir.path()) {
            Err(MushafError::ContentInvalid(msg)) => assert!(msg.contains("index.json")),
            other => panic!("expected invalid content, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_dir_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let content = ContentIndex::load_dir(dir.path()).unwrap();
        assert_eq!(content.chapter_index(Language::En).len(), 114);
    }
}
