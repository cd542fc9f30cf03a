//! Key-value store wrapper with automatic serialization.

use crate::store::{FileStore, KeyValueStore, MemoryStore};
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Type-safe cache over a [`KeyValueStore`].
///
/// Values are stored as JSON. Clones share the same store.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl Cache {
    /// Wrap an existing store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Open a volatile in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open a file-backed cache rooted at `dir`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open("./.vibe-data")?;
    /// ```
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        tracing::trace!(key, bytes = bytes.len(), "writing cache entry");
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Contacts {
        address: String,
        phone: String,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::in_memory();
        let contacts = Contacts {
            address: "Main St".into(),
            phone: "555".into(),
        };
        cache.set("contacts", &contacts).unwrap();
        assert_eq!(cache.get::<Contacts>("contacts").unwrap(), Some(contacts));
        assert_eq!(cache.get::<Contacts>("missing").unwrap(), None);
    }

    #[test]
    fn test_clones_share_store() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("flag", &true).unwrap();
        assert_eq!(other.get::<bool>("flag").unwrap(), Some(true));
        other.delete("flag").unwrap();
        assert!(!cache.exists("flag").unwrap());
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let store = MemoryStore::new();
        store.set("products", b"{not json").unwrap();
        let cache = Cache::new(store);
        assert!(matches!(
            cache.get::<Vec<u32>>("products"),
            Err(CacheError::SerializeError(_))
        ));
    }

    #[test]
    fn test_file_backed_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        cache.set("numbers", &[1, 2, 3]).unwrap();
        assert_eq!(cache.keys().unwrap(), vec!["numbers"]);

        let reopened = Cache::open(dir.path()).unwrap();
        assert_eq!(reopened.get::<Vec<i32>>("numbers").unwrap(), Some(vec![1, 2, 3]));
    }
}
