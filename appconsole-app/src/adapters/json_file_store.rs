//! Key-value store persisted as one JSON object on disk

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use appconsole_core::traits::KeyValueStore;
use appconsole_core::{CoreError, CoreResult};

/// File name used under the data directory.
pub const STORE_FILE: &str = "store.json";

/// JSON-file backed [`KeyValueStore`].
///
/// The file is read once, on first access; every write replaces it.
pub struct JsonFileStore {
    path: PathBuf,
    /// `None` until the file has been read.
    cache: Mutex<Option<BTreeMap<String, String>>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// Store at `<dir>/store.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_from_file(&self) -> CoreResult<BTreeMap<String, String>> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?
        {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                log::warn!(
                    "{} is not a valid store file ({e}), starting empty",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the map next to the store file, then rename it into place.
    async fn save_to_file(&self, map: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(map)?;
        let temp = self.temp_path();
        fs::write(&temp, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        if let Err(e) = fs::rename(&temp, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&temp).await {
                log::debug!("Could not remove {}: {cleanup}", temp.display());
            }
            return Err(CoreError::StorageError(e.to_string()));
        }
        Ok(())
    }

    async fn loaded(&self) -> CoreResult<MutexGuard<'_, Option<BTreeMap<String, String>>>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        Ok(cache)
    }

    /// Run `f` on a copy of the map. The copy replaces the cache only once
    /// it is on disk, so a failed write leaves both unchanged.
    async fn with_map<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> (T, bool),
    ) -> CoreResult<T> {
        let mut cache = self.loaded().await?;
        let mut map = cache.clone().unwrap_or_default();
        let (result, changed) = f(&mut map);
        if changed {
            self.save_to_file(&map).await?;
            *cache = Some(map);
        }
        Ok(result)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let cache = self.loaded().await?;
        Ok(cache.as_ref().and_then(|map| map.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.with_map(|map| {
            let previous = map.insert(key.to_string(), value.to_string());
            ((), previous.as_deref() != Some(value))
        })
        .await
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.with_map(|map| ((), map.remove(key).is_some())).await
    }
}
