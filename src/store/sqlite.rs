use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rusqlite_migration::{Migrations, M};

use crate::app::{MushafError, Result};
use crate::store::KeyValueStore;

const INITIAL_SCHEMA: &str = "
CREATE TABLE kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(INITIAL_SCHEMA)]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| MushafError::Config(format!("Migration failed: {}", e)))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            MushafError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock().map_err(|e| MushafError::read(key, e))?;

        conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| MushafError::read(key, e))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock().map_err(|e| MushafError::write(key, e))?;

        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| MushafError::write(key, e))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let conn = self.lock().map_err(|e| MushafError::write(key, e))?;

        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| MushafError::write(key, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get("@quran_language").await.unwrap(), None);

        store.set("@quran_language", "fr").await.unwrap();
        assert_eq!(
            store.get("@quran_language").await.unwrap(),
            Some("fr".into())
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = SqliteStore::in_memory().unwrap();
        store.set("@quran_font_size", "18").await.unwrap();
        store.set("@quran_font_size", "24").await.unwrap();

        assert_eq!(
            store.get("@quran_font_size").await.unwrap(),
            Some("24".into())
        );

        let conn = store.lock().unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SqliteStore::in_memory().unwrap();
        store.set("@quran_theme", "dark").await.unwrap();
        store.remove("@quran_theme").await.unwrap();
        assert_eq!(store.get("@quran_theme").await.unwrap(), None);

        // Removing a missing key is fine.
        store.remove("@quran_theme").await.unwrap();
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mushaf.db");

        {
            let store = SqliteStore::new(&path).unwrap();
            store
                .set("@quran_last_read", r#"{"chapterId":2,"verseId":5}"#)
                .await
                .unwrap();
        }

        let store = SqliteStore::new(&path).unwrap();
        assert_eq!(
            store.get("@quran_last_read").await.unwrap().as_deref(),
            Some(r#"{"chapterId":2,"verseId":5}"#)
        );
    }
}
