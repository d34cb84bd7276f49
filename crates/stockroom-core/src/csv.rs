//! CSV export of product records.
//!
//! Output is one header row followed by one row per product, joined with
//! `\n` and without a trailing newline.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{Product, format_price};

/// Header row of every export.
pub const CSV_HEADER: [&str; 4] = ["Product Name", "Quantity", "Price", "Image URL"];

/// Content type of an export file.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Encode products as CSV in the given order.
pub fn encode(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for product in products {
        let fields = [
            escape_field(&product.name),
            escape_field(&product.quantity.to_string()),
            escape_field(&format_price(product.price)),
            escape_field(&product.image_url),
        ];
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// Quote a field if it contains a comma, a double quote or a newline.
///
/// Embedded double quotes are doubled inside the quoted field.
pub fn escape_field(value: &str) -> String {
    if value.contains(['"', ',', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// File name for an export taken at `at`, e.g. `products_2024-05-01-13-45-09.csv`.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    let stamp = at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let stamp: String = stamp
        .chars()
        .take(19)
        .map(|c| if c == ':' || c == 'T' { '-' } else { c })
        .collect();
    format!("products_{stamp}.csv")
}
