//! Persisted preference storage.
//!
//! The switcher reads and writes the selected language through the
//! [`PreferenceStore`] trait, so it never touches a process-wide singleton.
//! [`MemoryStore`] keeps values for the lifetime of the value itself;
//! [`FileStore`] keeps them in a JSON file that survives restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Key under which the language preference is stored by default.
pub const DEFAULT_STORAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preference file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A key-value store holding the language preference.
pub trait PreferenceStore {
    /// Read the stored language tag, `None` when nothing was stored yet.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Overwrite the stored language tag.
    fn set(&mut self, tag: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self) -> Result<Option<String>, StoreError> {
        (**self).get()
    }

    fn set(&mut self, tag: &str) -> Result<(), StoreError> {
        (**self).set(tag)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self) -> Result<Option<String>, StoreError> {
        (**self).get()
    }

    fn set(&mut self, tag: &str) -> Result<(), StoreError> {
        (**self).set(tag)
    }
}

// ==================== In-memory store ====================

/// In-memory key-value store, shaped like browser local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    key: String,
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Store pre-seeded with a value, as if a previous session had saved it.
    pub fn with_value(tag: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(store.key.clone(), tag.to_string());
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw access to any key, including ones the switcher never writes.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(&self.key).cloned())
    }

    fn set(&mut self, tag: &str) -> Result<(), StoreError> {
        self.values.insert(self.key.clone(), tag.to_string());
        Ok(())
    }
}

// ==================== File-backed store ====================

/// One persisted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// JSON file store. The file holds an object mapping keys to
/// [`StoredEntry`] values; other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the whole entry (value and timestamp) for this store's key.
    pub fn entry(&self) -> Result<Option<StoredEntry>, StoreError> {
        Ok(self.read_all()?.remove(&self.key))
    }

    fn read_all(&self) -> Result<BTreeMap<String, StoredEntry>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No preference file at {}", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, StoredEntry>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        // Write next to the target and rename so readers never see a partial file
        let mut tmp_name = self.path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.entry()?.map(|entry| entry.value))
    }

    /// Overwrite the stored tag. A corrupt file is replaced rather than
    /// blocking the write; other keys it held are lost.
    fn set(&mut self, tag: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!("Replacing unreadable preference file: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(
            self.key.clone(),
            StoredEntry {
                value: tag.to_string(),
                updated_at: Utc::now(),
            },
        );
        self.write_all(&entries)?;

        debug!(
            "Stored {}={} in {}",
            self.key,
            tag,
            self.path.display()
        );
        Ok(())
    }
}
