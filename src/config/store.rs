//! Persisted form values.
//!
//! The saved blob is a flat JSON object of raw strings. There is no
//! schema versioning; anything that fails to read or parse is treated
//! as "nothing saved".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Raw form fields, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedConfig {
    /// Head position text.
    pub head: String,
    /// Comma-separated request text.
    pub requests: String,
    /// Policy selector.
    pub algorithm: String,
    /// Workload selector; persisted, not interpreted by the core.
    pub workload: String,
}

/// Storage for a single saved configuration.
pub trait ConfigStore {
    /// Persists `config`, replacing any previous value.
    fn save(&mut self, config: &SavedConfig) -> Result<()>;

    /// Loads the saved value; `None` when absent or unreadable.
    fn load(&self) -> Option<SavedConfig>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn save(&mut self, config: &SavedConfig) -> Result<()> {
        let text = serde_json::to_string(config)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn load(&self) -> Option<SavedConfig> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no saved config");
                return None;
            }
        };
        parse_saved(&text)
    }
}

/// In-memory store holding the serialized text.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with raw text (may be malformed).
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// Stored text, exactly as written.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl ConfigStore for MemoryStore {
    fn save(&mut self, config: &SavedConfig) -> Result<()> {
        self.blob = Some(serde_json::to_string(config)?);
        Ok(())
    }

    fn load(&self) -> Option<SavedConfig> {
        self.blob.as_deref().and_then(parse_saved)
    }
}

fn parse_saved(text: &str) -> Option<SavedConfig> {
    match serde_json::from_str(text) {
        Ok(config) => Some(config),
        Err(e) => {
            debug!(error = %e, "ignoring malformed saved config");
            None
        }
    }
}

/// Current form field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub head: String,
    pub requests: String,
    pub algorithm: String,
    pub workload: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            head: "50".to_string(),
            requests: String::new(),
            algorithm: "fcfs".to_string(),
            workload: "random".to_string(),
        }
    }
}

impl FormState {
    /// Snapshot of the fields for saving.
    pub fn to_saved(&self) -> SavedConfig {
        SavedConfig {
            head: self.head.clone(),
            requests: self.requests.clone(),
            algorithm: self.algorithm.clone(),
            workload: self.workload.clone(),
        }
    }

    /// Overwrites every field from `store` if something loads.
    ///
    /// Returns `true` when a saved config was applied; otherwise the
    /// prior values are untouched.
    pub fn apply_saved(&mut self, store: &dyn ConfigStore) -> bool {
        match store.load() {
            Some(saved) => {
                self.head = saved.head;
                self.requests = saved.requests;
                self.algorithm = saved.algorithm;
                self.workload = saved.workload;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavedConfig {
        SavedConfig {
            head: "53".into(),
            requests: "98,183,37".into(),
            algorithm: "sstf".into(),
            workload: "clustered".into(),
        }
    }

    #[test]
    fn test_memory_store_verbatim() {
        let mut store = MemoryStore::new();
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), Some(sample()));
        assert!(store.blob().unwrap().contains("\"algorithm\":\"sstf\""));
    }

    #[test]
    fn test_load_absent() {
        assert_eq!(MemoryStore::new().load(), None);
    }

    #[test]
    fn test_load_malformed_keeps_form() {
        let store = MemoryStore::with_blob("{not json");
        let mut form = FormState::default();
        form.requests = "1,2".into();
        assert!(!form.apply_saved(&store));
        assert_eq!(form.requests, "1,2");
        assert_eq!(form.head, "50");
    }

    #[test]
    fn test_apply_saved() {
        let mut store = MemoryStore::new();
        store.save(&sample()).unwrap();
        let mut form = FormState::default();
        assert!(form.apply_saved(&store));
        assert_eq!(form.to_saved(), sample());
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "disk-schedule-store-{}.json",
            std::process::id()
        ));
        let mut store = FileStore::new(&path);
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), Some(sample()));
        let _ = fs::remove_file(&path);
        assert_eq!(store.load(), None);
    }
}
