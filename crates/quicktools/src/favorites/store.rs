use crate::prelude::*;
use quicktools_core::favorites::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default store location: `<data dir>/quicktools/storage.json`
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs_next::data_dir().ok_or_else(|| eyre!("Unable to determine data directory"))?;

    Ok(data_dir.join("quicktools").join("storage.json"))
}

/// Key-value store persisted as one JSON object of string values
///
/// The file is read on every access and rewritten whole on every change; it
/// only comes into existence with the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            StoreError::Io(f!("Failed to read {}: {}", self.path.display(), e))
        })?;

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            StoreError::Serialization(f!("{} is not a JSON object of strings: {}", self.path.display(), e))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Io(f!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, raw)
            .map_err(|e| StoreError::Io(f!("Failed to write {}: {}", self.path.display(), e)))?;

        log::debug!("saved {} key(s) to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
