//! Path utilities for pokedex data directories.
//!
//! - Database location under the platform data directory
//! - Process-relative catalog cache directory
//!
//! Returns `PathBuf` and `PathError`; adapters decide what to do on failure.

mod error;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Default catalog cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR_RELATIVE: &str = "cache";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `POKEDEX_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/pokedex`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("POKEDEX_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("pokedex"))
}

/// Get the path to the pokedex database file.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");
    ensure_directory(&data_dir)?;
    Ok(data_dir.join("pokedex.db"))
}

/// Default catalog cache directory, resolved against the working directory.
pub fn default_cache_dir() -> Result<PathBuf, PathError> {
    let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    Ok(cwd.join(DEFAULT_CACHE_DIR_RELATIVE))
}

/// Create `path` (and parents) if missing, failing if it exists as a file.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
