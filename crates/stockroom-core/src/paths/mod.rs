//! Path utilities for stockroom data directories.
//!
//! This module provides the canonical path resolution for all components:
//! - Data root (override, environment, or system data directory)
//! - Database file
//! - Object storage root
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod error;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "STOCKROOM_DATA_DIR";

/// Resolve the root directory for application data.
///
/// Resolution order:
/// 1. `env_override`, the value of `STOCKROOM_DATA_DIR` (highest priority)
/// 2. `explicit` (e.g. a `--data-dir` flag)
/// 3. System data directory (e.g., `~/.local/share/stockroom`)
///
/// The directory is created if it doesn't exist.
pub fn resolve_data_root(
    env_override: Option<String>,
    explicit: Option<&Path>,
) -> Result<PathBuf, PathError> {
    let root = match env_override {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
        _ => match explicit {
            Some(path) if path.as_os_str().is_empty() => return Err(PathError::EmptyPath),
            Some(path) => path.to_path_buf(),
            None => dirs::data_local_dir()
                .ok_or(PathError::NoDataDir)?
                .join("stockroom"),
        },
    };

    ensure_directory(&root)?;
    Ok(root)
}

/// Path to the `SQLite` database file under `root`.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_directory(&data_dir)?;
    Ok(data_dir.join("stockroom.db"))
}

/// Root directory of the filesystem object store under `root`.
pub fn storage_root(root: &Path) -> Result<PathBuf, PathError> {
    let storage = root.join("storage");
    ensure_directory(&storage)?;
    Ok(storage)
}

/// Create `path` as a directory if missing.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
