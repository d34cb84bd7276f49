//! Local search over cached products.

use crate::domain::Product;

/// Filter products by case-insensitive substring match on the name.
///
/// A query that is empty after trimming returns every product. Matches keep
/// their relative order.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Trimmed, lower-cased form of a search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
