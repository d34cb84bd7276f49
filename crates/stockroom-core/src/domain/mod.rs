//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, object storage, terminal, etc.).
//!
//! # Structure
//!
//! - `product` - Product records, update payloads, images and render rows
//! - `numbers` - Lenient parsing of user-entered numbers

mod numbers;
mod product;

pub use numbers::{parse_number_or_zero, parse_price, parse_quantity};
pub use product::{
    EMPTY_NAME_PLACEHOLDER, ImageUpload, NewProduct, Product, ProductRow, ProductUpdate,
    StockLevel, StoredImage, format_price,
};
