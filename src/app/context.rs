use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{MushafError, Result};
use crate::config::{Config, ReadingConfig};
use crate::content::ContentIndex;
use crate::launch::LaunchSequence;
use crate::position::ReadingPositionTracker;
use crate::settings::SettingsModel;
use crate::store::{KeyValueStore, SqliteStore};

pub struct AppContext {
    pub content: Arc<ContentIndex>,
    pub settings: SettingsModel,
    pub tracker: ReadingPositionTracker,
    pub reading: ReadingConfig,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let db_path = match &config.storage.db_path {
            Some(p) => p.clone(),
            None => Self::data_dir()?.join("mushaf.db"),
        };
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data_dir = match &config.content.data_dir {
            Some(p) => p.clone(),
            None => Self::data_dir()?.join("chapters"),
        };

        tracing::debug!(
            "Opening store at {} with dataset {}",
            db_path.display(),
            data_dir.display()
        );

        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new(&db_path)?);
        let content = Arc::new(ContentIndex::load_dir(&data_dir)?);

        Ok(Self::with_parts(store, content, config.reading.clone()))
    }

    pub fn in_memory() -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::in_memory()?);
        let content = Arc::new(ContentIndex::builtin());

        Ok(Self::with_parts(store, content, ReadingConfig::default()))
    }

    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        content: Arc<ContentIndex>,
        reading: ReadingConfig,
    ) -> Self {
        Self {
            settings: SettingsModel::new(store.clone()),
            tracker: ReadingPositionTracker::new(store),
            content,
            reading,
        }
    }

    pub fn launch(&self) -> LaunchSequence {
        LaunchSequence::new(
            self.settings.clone(),
            self.tracker.clone(),
            self.content.clone(),
        )
    }

    fn data_dir() -> Result<PathBuf> {
        Config::default_data_dir().map_err(|e| MushafError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentConfig, StorageConfig};

    #[tokio::test]
    async fn test_in_memory_context_launches() {
        let ctx = AppContext::in_memory().unwrap();
        ctx.tracker.save_last_read(2, 255).await;

        let view = ctx.launch().run().await;
        assert_eq!((view.chapter_id, view.initial_verse_id), (2, 255));
    }

    #[tokio::test]
    async fn test_context_from_config_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage: StorageConfig {
                db_path: Some(dir.path().join("db").join("mushaf.db")),
            },
            content: ContentConfig {
                data_dir: Some(dir.path().join("chapters")),
            },
            reading: ReadingConfig::default(),
        };

        {
            let ctx = AppContext::new(&config).unwrap();
            ctx.tracker.save_last_read(18, 10).await;
        }

        let ctx = AppContext::new(&config).unwrap();
        let view = ctx.launch().run().await;
        assert_eq!(view.chapter_transliteration, "Al-Kahf");
        assert_eq!(view.initial_verse_id, 10);
    }
}
