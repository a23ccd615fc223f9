//! Local key-value persistence for the last-used parameter set.
//!
//! The store holds string values under string keys. Parameters live under a
//! single key as one JSON document in the grouped layout.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use scenario_schema::{ParameterOverlay, ScenarioParameters};
use thiserror::Error;

/// Storage key holding the serialized parameter document.
pub const PARAMETERS_KEY: &str = "scenarioParams";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write store at {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store, mainly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk. A missing file reads as empty; an
/// unreadable or corrupt file is reported as an error.
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

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

pub fn save_parameters(
    store: &mut dyn KeyValueStore,
    params: &ScenarioParameters,
) -> Result<(), StoreError> {
    let document = serde_json::to_string(params)?;
    store.set(PARAMETERS_KEY, document)?;
    tracing::info!(target: "scenario::store", key = PARAMETERS_KEY, "parameters.saved");
    Ok(())
}

/// Read the persisted overlay. Absent, unreadable or malformed entries yield
/// `None` after logging.
pub fn load_stored_overlay(store: &dyn KeyValueStore) -> Option<ParameterOverlay> {
    let document = match store.get(PARAMETERS_KEY) {
        Ok(Some(document)) => document,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(
                target: "scenario::store",
                error = %err,
                "stored_overlay.read_failed"
            );
            return None;
        }
    };

    match ParameterOverlay::from_json_str(&document) {
        Ok(overlay) => Some(overlay),
        Err(err) => {
            tracing::warn!(
                target: "scenario::store",
                error = %err,
                "stored_overlay.parse_failed"
            );
            None
        }
    }
}

pub fn clear_parameters(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(PARAMETERS_KEY)
}
