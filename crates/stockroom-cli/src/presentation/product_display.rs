//! Product summary display utilities for CLI output.

use stockroom_core::{Product, format_price};

/// Options for displaying a product summary.
#[derive(Debug, Clone, Default)]
pub struct ProductSummaryOpts<'a> {
    /// Optional title to display before the product details.
    pub title: Option<&'a str>,
    /// Whether to include the write timestamps.
    pub show_timestamps: bool,
}

impl<'a> ProductSummaryOpts<'a> {
    /// Create options with a title.
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            ..Default::default()
        }
    }

    /// Create options for removal confirmation (includes timestamps).
    pub fn for_removal() -> Self {
        Self {
            title: Some("Product to remove:"),
            show_timestamps: true,
        }
    }
}

/// Render a product summary as lines of text.
pub fn format_product_summary(product: &Product, opts: &ProductSummaryOpts<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = opts.title {
        lines.push(title.to_string());
    }

    lines.push(format!("  ID: {}", product.id));
    lines.push(format!("  Name: {}", product.name));
    lines.push(format!(
        "  Quantity: {} ({})",
        product.quantity,
        product.stock_level()
    ));
    lines.push(format!("  Price: {}", format_price(product.price)));
    if product.has_image() {
        lines.push(format!("  Image: {}", product.image_url));
    }

    if opts.show_timestamps {
        lines.push(format!(
            "  Created: {}",
            product.created_at.format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!(
            "  Updated: {}",
            product.updated_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    lines
}

/// Display a product summary to stdout.
///
/// ```rust,ignore
/// display_product_summary(&product, &ProductSummaryOpts::with_title("Product saved:"));
/// ```
pub fn display_product_summary(product: &Product, opts: &ProductSummaryOpts<'_>) {
    for line in format_product_summary(product, opts) {
        println!("{line}");
    }
}
