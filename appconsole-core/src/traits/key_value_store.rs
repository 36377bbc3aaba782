//! Key-value store abstract Trait

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};

/// Key-value store Trait
///
/// String keys to string values. The console keeps its session material,
/// login-attempt bookkeeping, UI flags and panel caches here (see
/// [`crate::storage_keys`]).
///
/// Platform implementations:
/// - `InMemoryKeyValueStore` (this module): tests and ephemeral sessions
/// - `JsonFileStore` (`appconsole-app`): one JSON file in the data directory
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key exists
    /// * `Ok(None)` - key does not exist
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Delete a value. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> CoreResult<()>;
}

/// Read and deserialize a JSON value.
///
/// A value that no longer deserializes (older format, manual edit) is
/// treated as absent and logged, so a stale cache never blocks the UI.
pub async fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> CoreResult<Option<T>>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("Ignoring unreadable value under '{key}': {e}");
            Ok(None)
        }
    }
}

/// Serialize a value as JSON and store it.
pub async fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> CoreResult<()>
where
    T: Serialize + ?Sized + Sync,
{
    let raw = serde_json::to_string(value).map_err(|e| CoreError::SerializationError(e.to_string()))?;
    store.set(key, &raw).await
}

/// In-memory key-value store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("sidebarOpen").await.unwrap(), None);

        store.set("sidebarOpen", "true").await.unwrap();
        assert_eq!(store.get("sidebarOpen").await.unwrap().as_deref(), Some("true"));

        store.remove("sidebarOpen").await.unwrap();
        store.remove("sidebarOpen").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn json_helpers_roundtrip_and_tolerate_garbage() {
        let store = InMemoryKeyValueStore::new();
        save_json(&store, "cache:promos", &vec![1, 2, 3]).await.unwrap();
        let loaded: Option<Vec<i32>> = load_json(&store, "cache:promos").await.unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));

        store.set("cache:promos", "{not json").await.unwrap();
        let loaded: Option<Vec<i32>> = load_json(&store, "cache:promos").await.unwrap();
        assert_eq!(loaded, None);
    }
}
