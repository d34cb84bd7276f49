//! Runtime configuration.
//!
//! Values come from the environment (after `.env` is loaded by the binary)
//! with command-line overrides for the data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths::{self, DATA_DIR_ENV, PathError};
use crate::ports::CoreError;

/// Environment variable holding the public prefix for image URLs.
pub const PUBLIC_BASE_URL_ENV: &str = "STOCKROOM_PUBLIC_BASE_URL";

/// Environment variable holding the external-change poll interval.
pub const WATCH_INTERVAL_ENV: &str = "STOCKROOM_WATCH_INTERVAL_MS";

/// Default poll interval for changes committed by other processes.
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 500;

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Root directory for the database and stored objects.
    pub data_root: PathBuf,
    /// Prefix for image URLs. `None` means `file://` URLs.
    pub public_base_url: Option<String>,
    /// How often the store checks for external commits.
    pub watch_interval: Duration,
}

impl StockroomConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env(explicit_data_dir: Option<&Path>) -> Result<Self, CoreError> {
        Self::from_lookup(explicit_data_dir, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(explicit_data_dir: Option<&Path>, lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_root = paths::resolve_data_root(lookup(DATA_DIR_ENV), explicit_data_dir)?;

        let public_base_url = lookup(PUBLIC_BASE_URL_ENV)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let watch_interval_ms = match lookup(WATCH_INTERVAL_ENV) {
            Some(raw) => parse_interval(&raw)?,
            None => DEFAULT_WATCH_INTERVAL_MS,
        };

        Ok(Self {
            data_root,
            public_base_url,
            watch_interval: Duration::from_millis(watch_interval_ms),
        })
    }

    /// Path to the `SQLite` database file.
    pub fn database_path(&self) -> Result<PathBuf, PathError> {
        paths::database_path(&self.data_root)
    }

    /// Root directory of the object store.
    pub fn storage_root(&self) -> Result<PathBuf, PathError> {
        paths::storage_root(&self.data_root)
    }
}

fn parse_interval(raw: &str) -> Result<u64, CoreError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(CoreError::Validation(format!(
            "{WATCH_INTERVAL_ENV} must be a positive number of milliseconds, got '{raw}'"
        ))),
    }
}
