//! View state of one open chapter.
//!
//! Opening a chapter records the target verse right away. After a jump to
//! a verse past the first, visibility events are dropped until the settle
//! deadline so the verses scrolled past during the jump never overwrite
//! the intended position. Events are compared against the deadline when
//! they arrive; nothing is queued or cancelled.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::domain::{ChapterRecord, Language};
use crate::i18n;
use crate::position::ReadingPositionTracker;

/// Scroll delay plus settle time observed after a programmatic jump.
pub const DEFAULT_SETTLE_GRACE: Duration = Duration::from_millis(700);

pub struct ReadingSession {
    tracker: ReadingPositionTracker,
    chapter: Arc<ChapterRecord>,
    current_verse: u16,
    settle_deadline: Instant,
}

impl ReadingSession {
    pub async fn open(
        tracker: ReadingPositionTracker,
        chapter: Arc<ChapterRecord>,
        target_verse: u16,
        grace: Duration,
        now: Instant,
    ) -> Self {
        let last = chapter.total_verses.max(1);
        let target = target_verse.clamp(1, last);
        if target != target_verse {
            tracing::debug!(
                "Target verse {} outside chapter {}, using {}",
                target_verse,
                chapter.id,
                target
            );
        }

        // Only a real jump needs time to settle.
        let settle_deadline = if target > 1 && chapter.contains_verse(target) {
            now + grace
        } else {
            now
        };

        tracker.save_last_read(chapter.id, target).await;

        Self {
            tracker,
            chapter,
            current_verse: target,
            settle_deadline,
        }
    }

    pub fn chapter(&self) -> &ChapterRecord {
        &self.chapter
    }

    pub fn current_verse(&self) -> u16 {
        self.current_verse
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now >= self.settle_deadline
    }

    /// Handle a visibility change. `visible` lists the verse ids on screen,
    /// top first. Returns whether the position was recorded.
    pub async fn on_visible(&mut self, visible: &[u16], now: Instant) -> bool {
        let Some(&verse_id) = visible.first() else {
            return false;
        };

        if !self.is_settled(now) {
            tracing::trace!("Dropping visibility of verse {} while settling", verse_id);
            return false;
        }

        if !self.chapter.contains_verse(verse_id) {
            tracing::warn!(
                "Ignoring visibility of unknown verse {} in chapter {}",
                verse_id,
                self.chapter.id
            );
            return false;
        }

        self.current_verse = verse_id;
        self.tracker.save_last_read(self.chapter.id, verse_id).await;
        true
    }

    pub fn counter(&self) -> VerseCounter {
        VerseCounter::new(self.current_verse, self.chapter.total_verses)
    }
}

/// Header counter, e.g. `Verse 5 / 286`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseCounter {
    pub current: u16,
    pub total: u16,
}

impl VerseCounter {
    pub fn new(current: u16, total: u16) -> Self {
        Self { current, total }
    }

    pub fn label(&self, language: Language) -> String {
        format!(
            "{} {} / {}",
            i18n::localized(language, i18n::VERSE),
            self.current,
            self.total
        )
    }

    /// Share of the chapter reached, 0.0 to 100.0.
    pub fn progress_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (f32::from(self.current) / f32::from(self.total) * 100.0).min(100.0)
    }
}
