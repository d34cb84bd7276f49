//! Command handlers that delegate to AppCore.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<...>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call AppCore methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access repositories directly
//! - Contain business logic
//! - Manage database connections

use std::path::Path;

use anyhow::{Context, Result};
use stockroom_core::ImageUpload;

pub mod add;
pub mod edit;
pub mod export;
pub mod list;
pub mod paths;
pub mod remove;
pub mod watch;

/// Read an image file for upload, keyed by its file name.
pub async fn read_image(path: &Path) -> Result<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
    Ok(ImageUpload::new(file_name, bytes))
}

/// Read an optional image argument.
pub async fn read_optional_image(path: Option<&Path>) -> Result<Option<ImageUpload>> {
    match path {
        Some(path) => Ok(Some(read_image(path).await?)),
        None => Ok(None),
    }
}
