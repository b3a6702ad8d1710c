//! Write-once, read-many on-disk memoization of catalog entries.
//!
//! One JSON file per entry name under the cache directory. Files are never
//! invalidated; a file that cannot be read or parsed counts as a miss and is
//! overwritten by the next successful fetch.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::Entry;

/// Errors writing a cache file.
#[derive(Debug, Error)]
pub enum DiskCacheError {
    #[error("Failed to write cache file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize entry '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-name JSON file cache for remote entries.
#[derive(Debug, Clone)]
pub struct EntryDiskCache {
    dir: PathBuf,
}

impl EntryDiskCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `name`, or `None` if the name is not safe to use as a
    /// file name (path separators, leading dot, empty, non-ASCII).
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let safe = !name.is_empty()
            && !name.starts_with('.')
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
        safe.then(|| self.dir.join(format!("{name}.json")))
    }

    /// Cached entry for `name`, if present and parseable.
    pub async fn read(&self, name: &str) -> Option<Entry> {
        let path = self.path_for(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(target: "pokedex.cache", path = %path.display(), error = %e, "Unreadable cache file");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entry) => {
                debug!(target: "pokedex.cache", name, "Cache hit");
                Some(entry)
            }
            Err(e) => {
                warn!(target: "pokedex.cache", path = %path.display(), error = %e, "Corrupt cache file, ignoring");
                None
            }
        }
    }

    /// Persist `entry` under `name`. Names that fail [`Self::path_for`] are
    /// silently skipped.
    pub async fn write(&self, name: &str, entry: &Entry) -> Result<(), DiskCacheError> {
        let Some(path) = self.path_for(name) else {
            return Ok(());
        };

        let json = serde_json::to_vec(entry).map_err(|source| DiskCacheError::Serialize {
            name: name.to_string(),
            source,
        })?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| DiskCacheError::Io {
                path: self.dir.clone(),
                source,
            })?;

        tokio::fs::write(&path, json)
            .await
            .map_err(|source| DiskCacheError::Io { path, source })
    }
}
