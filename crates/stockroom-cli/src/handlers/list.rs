//! List command handler.
//!
//! Prints products, newest first, optionally filtered by name.

use anyhow::Result;
use stockroom_core::{Product, ProductRenderer, ProductRow, filter_products};

use crate::bootstrap::CliContext;
use crate::presentation::TableRenderer;

/// Execute the list command.
///
/// Returns the products that were printed.
///
/// # Errors
///
/// This function will return an error if:
/// - Database query fails
/// - JSON serialization fails
pub async fn execute(ctx: &CliContext, search: Option<&str>, json: bool) -> Result<Vec<Product>> {
    let products = ctx.app().inventory().list().await?;
    let visible = filter_products(&products, search.unwrap_or_default());

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        let rows: Vec<ProductRow> = visible.iter().map(ProductRow::from).collect();
        TableRenderer::new().render(&rows);
        if products.is_empty() {
            println!("Use 'stockroom add --name <NAME>' to add your first product.");
        }
    }

    Ok(visible)
}
