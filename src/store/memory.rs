use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{MushafError, Result};
use crate::store::KeyValueStore;

/// Process-local store with switchable read/write failures, either for
/// every key or for selected keys.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    failing_keys: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail until switched off.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail until switched off.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make reads and writes of `key` fail until cleared.
    pub fn fail_key(&self, key: &str) {
        if let Ok(mut keys) = self.failing_keys.lock() {
            keys.insert(key.to_string());
        }
    }

    pub fn clear_failures(&self) {
        self.fail_reads(false);
        self.fail_writes(false);
        if let Ok(mut keys) = self.failing_keys.lock() {
            keys.clear();
        }
    }

    fn key_fails(&self, key: &str) -> bool {
        self.failing_keys
            .lock()
            .map(|keys| keys.contains(key))
            .unwrap_or(false)
    }

    /// Store a value bypassing failure injection.
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) || self.key_fails(key) {
            return Err(MushafError::read(key, "injected read failure"));
        }

        let values = self.values.lock().map_err(|e| MushafError::read(key, e))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) || self.key_fails(key) {
            return Err(MushafError::write(key, "injected write failure"));
        }

        let mut values = self.values.lock().map_err(|e| MushafError::write(key, e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) || self.key_fails(key) {
            return Err(MushafError::write(key, "injected write failure"));
        }

        let mut values = self.values.lock().map_err(|e| MushafError::write(key, e))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        tokio_test::block_on(store.set("k", "v")).unwrap();
        let value = tokio_test::block_on(store.get("k")).unwrap();
        assert_eq!(value, Some("v".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let store = MemoryStore::new();
        tokio_test::block_on(store.set("k", "old")).unwrap();

        store.fail_writes(true);
        let err = tokio_test::block_on(store.set("k", "new")).unwrap_err();
        assert!(matches!(err, MushafError::StorageWrite { .. }));
        store.fail_writes(false);

        assert_eq!(store.raw("k"), Some("old".into()));
    }

    #[test]
    fn test_failed_read() {
        let store = MemoryStore::new();
        store.insert_raw("k", "v");
        store.fail_reads(true);
        assert!(matches!(
            tokio_test::block_on(store.get("k")),
            Err(MushafError::StorageRead { .. })
        ));
    }

    #[test]
    fn test_failing_key_leaves_others_alone() {
        let store = MemoryStore::new();
        store.insert_raw("a", "1");
        store.insert_raw("b", "2");
        store.fail_key("a");
        let get = |key: &str| tokio_test::block_on(store.get(key));

        assert!(get("a").is_err());
        assert!(tokio_test::block_on(store.set("a", "3")).is_err());
        assert_eq!(get("b").unwrap(), Some("2".into()));
        tokio_test::block_on(store.set("b", "4")).unwrap();

        store.clear_failures();
        assert_eq!(get("a").unwrap(), Some("1".into()));
        assert_eq!(store.raw("b"), Some("4".into()));
    }
}
