//! Draft and history persistence
//!
//! A small synchronous key-value facade. The store is an injected
//! dependency so the calculators and validators stay pure; callers pick an
//! in-memory store or a file-backed one. All public save/load entry points
//! are best-effort: failures are logged and degrade to "nothing persisted".

use crate::error::Result;
use hashbrown::HashMap;
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read the raw value under a key, if present
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value under a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key and its value
    fn remove(&mut self, key: &str);
}

/// Volatile in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed store keeping one JSON document per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("failed to read stored key '{key}': {err}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = fs::remove_file(self.path_for(key)) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to remove stored key '{key}': {err}");
            }
        }
    }
}

/// Save a draft or record under a key, best-effort.
///
/// Serialization or write failures are logged and swallowed; the save never
/// fails the calling flow.
pub fn save_form_data<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, data: &T) {
    let json = match serde_json::to_string(data) {
        Ok(json) => json,
        Err(err) => {
            error!("failed to serialize data for key '{key}': {err}");
            return;
        }
    };
    if let Err(err) = store.set(key, &json) {
        error!("failed to save data for key '{key}': {err}");
    }
}

/// Load a draft or record from a key.
///
/// Returns `None` when the key is absent or holds data that no longer
/// deserializes (logged, not propagated).
pub fn load_form_data<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(data) => Some(data),
        Err(err) => {
            warn!("discarding corrupt data under key '{key}': {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalculatorType;
    use crate::validation::PositionSizerForm;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_draft_save_and_load() {
        let mut store = MemoryStore::new();
        let key = CalculatorType::PositionSizer.storage_key();
        let form = PositionSizerForm {
            account_balance: "10000".to_string(),
            risk_percentage: "2".to_string(),
            entry_price: "50000".to_string(),
            stop_loss_price: "48000".to_string(),
        };

        save_form_data(&mut store, key, &form);
        let loaded: PositionSizerForm = load_form_data(&store, key).unwrap();
        assert_eq!(loaded.entry_price, "50000");
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<PositionSizerForm> = load_form_data(&store, "nope");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt_data_is_none() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut store = MemoryStore::new();
        store.set("k", "{not json").unwrap();
        let loaded: Option<PositionSizerForm> = load_form_data(&store, "k");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("leverage-lever-position-sizer", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("leverage-lever-position-sizer").as_deref(),
            Some("{\"a\":1}")
        );

        store.remove("leverage-lever-position-sizer");
        assert_eq!(store.get("leverage-lever-position-sizer"), None);
        // Removing again is a no-op
        store.remove("leverage-lever-position-sizer");
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("k", "persisted").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("persisted"));
    }
}
