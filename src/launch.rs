//! Launch-time resolution of where the reader resumes.
//!
//! ```text
//! Uninitialized -> SettingsLoaded -> ContentResolved -> Ready
//! ```
//!
//! Each arrow is one [`LaunchSequence::advance`] call. `Ready` is terminal.

use std::sync::Arc;

use crate::content::ContentIndex;
use crate::domain::{ChapterSummary, Language, ReadingPosition};
use crate::position::ReadingPositionTracker;
use crate::settings::SettingsModel;

/// Parameters handed to the first chapter view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialView {
    pub language: Language,
    pub chapter_id: u16,
    pub chapter_name: String,
    pub chapter_transliteration: String,
    pub chapter_translation: String,
    pub total_verses: u16,
    pub initial_verse_id: u16,
}

impl InitialView {
    fn new(language: Language, chapter: &ChapterSummary, verse_id: u16) -> Self {
        Self {
            language,
            chapter_id: chapter.id,
            chapter_name: chapter.name.clone(),
            chapter_transliteration: chapter.transliteration.clone(),
            chapter_translation: chapter.translation.clone(),
            total_verses: chapter.total_verses,
            initial_verse_id: verse_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchState {
    Uninitialized,
    SettingsLoaded {
        language: Language,
        last_read: Option<ReadingPosition>,
    },
    ContentResolved(InitialView),
    Ready(InitialView),
}

pub struct LaunchSequence {
    settings: SettingsModel,
    tracker: ReadingPositionTracker,
    content: Arc<ContentIndex>,
    state: LaunchState,
}

impl LaunchSequence {
    pub fn new(
        settings: SettingsModel,
        tracker: ReadingPositionTracker,
        content: Arc<ContentIndex>,
    ) -> Self {
        Self {
            settings,
            tracker,
            content,
            state: LaunchState::Uninitialized,
        }
    }

    pub fn state(&self) -> &LaunchState {
        &self.state
    }

    /// Take one transition. Does nothing once `Ready`.
    pub async fn advance(&mut self) -> &LaunchState {
        let next = match &self.state {
            LaunchState::Uninitialized => {
                let (language, last_read) =
                    tokio::join!(self.settings.language(), self.tracker.last_read());
                tracing::debug!(
                    "Launch settings: language={}, last_read={:?}",
                    language,
                    last_read
                );
                Some(LaunchState::SettingsLoaded {
                    language,
                    last_read,
                })
            }
            LaunchState::SettingsLoaded {
                language,
                last_read,
            } => Some(LaunchState::ContentResolved(resolve(
                &self.content,
                *language,
                *last_read,
            ))),
            LaunchState::ContentResolved(view) => Some(LaunchState::Ready(view.clone())),
            LaunchState::Ready(_) => None,
        };

        if let Some(next) = next {
            self.state = next;
        }
        &self.state
    }

    /// Drive the sequence to `Ready` and return the frozen view.
    pub async fn run(mut self) -> InitialView {
        loop {
            if let LaunchState::Ready(view) = self.advance().await {
                return view.clone();
            }
        }
    }
}

fn resolve(
    content: &ContentIndex,
    language: Language,
    last_read: Option<ReadingPosition>,
) -> InitialView {
    let fallback = ReadingPosition::default();
    let position = last_read.unwrap_or(fallback);

    let (chapter, verse_id) = match content.summary(language, position.chapter_id) {
        Some(chapter) => {
            let verse_id = position.verse_id.clamp(1, chapter.total_verses.max(1));
            (chapter, verse_id)
        }
        None => {
            tracing::warn!(
                "Stored chapter {} not in {} index, starting at chapter {}",
                position.chapter_id,
                language,
                fallback.chapter_id
            );
            match content.summary(language, fallback.chapter_id) {
                Some(chapter) => (chapter, fallback.verse_id),
                None => {
                    // Empty index; nothing better than the bare position.
                    return InitialView {
                        language,
                        chapter_id: fallback.chapter_id,
                        chapter_name: String::new(),
                        chapter_transliteration: String::new(),
                        chapter_translation: String::new(),
                        total_verses: 0,
                        initial_verse_id: fallback.verse_id,
                    };
                }
            }
        }
    };

    InitialView::new(language, chapter, verse_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::LAST_READ_KEY;
    use crate::settings::LANGUAGE_KEY;
    use crate::store::MemoryStore;

    fn sequence(store: Arc<MemoryStore>) -> LaunchSequence {
        LaunchSequence::new(
            SettingsModel::new(store.clone()),
            ReadingPositionTracker::new(store),
            Arc::new(ContentIndex::builtin()),
        )
    }

    #[tokio::test]
    async fn test_fresh_store_starts_at_opener() {
        let view = sequence(Arc::new(MemoryStore::new())).run().await;
        assert_eq!(view.chapter_id, 1);
        assert_eq!(view.chapter_transliteration, "Al-Fatihah");
        assert_eq!(view.chapter_translation, "The Opener");
        assert_eq!(view.initial_verse_id, 1);
        assert_eq!(view.language, Language::En);
    }

    #[tokio::test]
    async fn test_resumes_stored_position() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LAST_READ_KEY, r#"{"chapterId":2,"verseId":5}"#);

        let view = sequence(store).run().await;
        assert_eq!(view.chapter_id, 2);
        assert_eq!(view.chapter_name, "البقرة");
        assert_eq!(view.chapter_transliteration, "Al-Baqarah");
        assert_eq!(view.total_verses, 286);
        assert_eq!(view.initial_verse_id, 5);
    }

    #[tokio::test]
    async fn test_unknown_chapter_falls_back() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LAST_READ_KEY, r#"{"chapterId":999,"verseId":5}"#);

        let view = sequence(store).run().await;
        assert_eq!(view.chapter_id, 1);
        assert_eq!(view.initial_verse_id, 1);
    }

    #[tokio::test]
    async fn test_legacy_position() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LAST_READ_KEY, "18");

        let view = sequence(store).run().await;
        assert_eq!(view.chapter_id, 18);
        assert_eq!(view.initial_verse_id, 1);
    }

    #[tokio::test]
    async fn test_verse_past_end_is_clamped() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LAST_READ_KEY, r#"{"chapterId":1,"verseId":40}"#);

        let view = sequence(store).run().await;
        assert_eq!(view.initial_verse_id, 7);
    }

    #[tokio::test]
    async fn test_read_failure_falls_back() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LAST_READ_KEY, r#"{"chapterId":2,"verseId":5}"#);
        store.fail_reads(true);

        let view = sequence(store).run().await;
        assert_eq!((view.chapter_id, view.initial_verse_id), (1, 1));
    }

    #[tokio::test]
    async fn test_transitions_step_by_step() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LANGUAGE_KEY, "fr");
        store.insert_raw(LAST_READ_KEY, r#"{"chapterId":36,"verseId":2}"#);
        let mut launch = sequence(store);

        assert_eq!(launch.state(), &LaunchState::Uninitialized);
        assert_eq!(
            launch.advance().await,
            &LaunchState::SettingsLoaded {
                language: Language::Fr,
                last_read: Some(ReadingPosition::new(36, 2)),
            }
        );

        let resolved = match launch.advance().await {
            LaunchState::ContentResolved(view) => view.clone(),
            other => panic!("unexpected state {:?}", other),
        };
        // French has no pack loaded, so the default index supplies metadata.
        assert_eq!(resolved.chapter_transliteration, "Ya-Sin");
        assert_eq!(resolved.language, Language::Fr);

        assert_eq!(
            launch.advance().await,
            &LaunchState::Ready(resolved.clone())
        );
        assert_eq!(launch.advance().await, &LaunchState::Ready(resolved));
    }
}
