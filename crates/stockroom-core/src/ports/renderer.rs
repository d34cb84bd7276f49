//! Presentation port for the product list.

use crate::domain::ProductRow;

/// Draws the visible product list.
///
/// Every call replaces whatever was drawn before; implementations clear and
/// repopulate instead of diffing.
pub trait ProductRenderer: Send + Sync {
    /// Render the rows in the given order.
    fn render(&self, rows: &[ProductRow]);
}
