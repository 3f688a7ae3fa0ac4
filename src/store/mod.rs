pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::app::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Persistent string key-value storage.
///
/// Writes are atomic per key. Implementations never retry; callers decide
/// what a failure means for them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}
