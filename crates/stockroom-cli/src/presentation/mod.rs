//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services or the `ProductRow` view-model

pub mod product_display;
pub mod product_table;
pub mod tables;

// Re-export commonly used items
pub use product_display::{ProductSummaryOpts, display_product_summary, format_product_summary};
pub use product_table::{TableRenderer, format_table};
pub use tables::{or_placeholder, truncate_string};
