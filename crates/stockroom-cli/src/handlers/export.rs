//! Export command handler.
//!
//! Writes every product, ignoring any search text, to a timestamped CSV file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use stockroom_core::csv::{CSV_MIME_TYPE, export_file_name};
use tracing::debug;

use crate::bootstrap::CliContext;

/// Execute the export command and return the path of the written file.
///
/// # Errors
///
/// This function will return an error if:
/// - Database query fails
/// - The output directory cannot be created or written
pub async fn execute(ctx: &CliContext, output_dir: &Path) -> Result<PathBuf> {
    let csv = ctx.app().inventory().export_csv().await?;

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let path = output_dir.join(export_file_name(Utc::now()));
    tokio::fs::write(&path, csv.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(path = %path.display(), mime = CSV_MIME_TYPE, bytes = csv.len(), "Wrote export");
    println!("Exported products to {}", path.display());
    Ok(path)
}
