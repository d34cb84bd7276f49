//! Paths command handler.
//!
//! Displays all resolved locations for diagnostics.

use anyhow::Result;
use stockroom_core::StockroomConfig;

/// Execute the paths command.
///
/// Prints the resolved configuration in `key = value` format.
pub fn execute(config: &StockroomConfig) -> Result<()> {
    for line in format_paths(config)? {
        println!("{line}");
    }
    Ok(())
}

fn format_paths(config: &StockroomConfig) -> Result<Vec<String>> {
    Ok(vec![
        format!("data_root = {}", config.data_root.display()),
        format!("database = {}", config.database_path()?.display()),
        format!("storage = {}", config.storage_root()?.display()),
        format!(
            "public_base_url = {}",
            config.public_base_url.as_deref().unwrap_or("(file://)")
        ),
        format!("watch_interval_ms = {}", config.watch_interval.as_millis()),
    ])
}
