use std::sync::Arc;

use crate::domain::{ReadingPosition, StoredPosition};
use crate::store::KeyValueStore;

pub const LAST_READ_KEY: &str = "@quran_last_read";

/// Persists the last verse the reader actually saw.
#[derive(Clone)]
pub struct ReadingPositionTracker {
    store: Arc<dyn KeyValueStore>,
}

impl ReadingPositionTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save_last_read(&self, chapter_id: u16, verse_id: u16) {
        self.save(ReadingPosition::new(chapter_id, verse_id)).await;
    }

    pub async fn save_chapter(&self, chapter_id: u16) {
        self.save(ReadingPosition::chapter_start(chapter_id)).await;
    }

    pub async fn save(&self, position: ReadingPosition) {
        let value = match serde_json::to_string(&position) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Error encoding last read: {}", e);
                return;
            }
        };

        match self.store.set(LAST_READ_KEY, &value).await {
            Ok(()) => tracing::trace!(
                "Saved last read {}:{}",
                position.chapter_id,
                position.verse_id
            ),
            Err(e) => tracing::error!("Error saving last read: {}", e),
        }
    }

    /// Last saved position, accepting the legacy chapter-only encoding.
    pub async fn last_read(&self) -> Option<ReadingPosition> {
        let value = match self.store.get(LAST_READ_KEY).await {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!("Error getting last read: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<StoredPosition>(&value) {
            Ok(stored) => Some(stored.into()),
            Err(e) => {
                tracing::warn!("Ignoring unreadable last read {:?}: {}", value, e);
                None
            }
        }
    }
}
