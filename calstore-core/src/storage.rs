//! Key-value persistence layer.
//!
//! Each key is a file in the storage directory holding a JSON-encoded value.
//! The read and write paths are deliberately asymmetric: `load` never fails
//! (any missing, unreadable or corrupt value becomes the caller's fallback,
//! so state initialization cannot be broken by bad on-disk data), while `save`
//! propagates failures to the caller.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};

/// A directory-backed key-value store for JSON values.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open a storage rooted at `dir`. The directory is created lazily on the
    /// first `save`, so opening never touches the filesystem.
    pub fn open(dir: impl Into<PathBuf>) -> Storage {
        Storage { dir: dir.into() }
    }

    /// Default storage directory: the platform data dir plus `calstore`
    /// (e.g. `~/.local/share/calstore`).
    pub fn default_dir() -> StoreResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StoreError::Storage("Could not determine data directory".into()))?;
        Ok(data_dir.join("calstore"))
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Read the value stored at `key`, or `fallback` if there is none.
    ///
    /// Every failure mode (absent key, IO error, malformed JSON) returns the
    /// fallback; no error is surfaced.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let path = self.dir.join(key);

        let Ok(raw) = std::fs::read_to_string(&path) else {
            return fallback;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(_) => fallback,
        }
    }

    /// Write `value` at `key`, unconditionally overwriting any existing value.
    ///
    /// The write goes through a temp file and a rename so a crash mid-write
    /// leaves the previous value intact.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(key);
        let temp = self.dir.join(format!("{}.tmp", key));

        let content = serde_json::to_string(value)?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}
