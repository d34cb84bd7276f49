//! Product domain types.
//!
//! These types represent inventory records in the system, independent of
//! any infrastructure concerns (database, object storage, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Product Types
// ─────────────────────────────────────────────────────────────────────────────

/// A product that exists in the store with an assigned ID.
///
/// `image_url` and `image_path` are either both empty or both refer to the
/// same stored object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier assigned by the store on creation.
    pub id: String,
    /// Human-readable product name.
    #[serde(default)]
    pub name: String,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u64,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Public URL of the product image, or empty.
    #[serde(default)]
    pub image_url: String,
    /// Object-store key of the product image, or empty.
    #[serde(default)]
    pub image_path: String,
    /// Write time of the first commit, assigned by the store.
    pub created_at: DateTime<Utc>,
    /// Write time of the latest commit, assigned by the store.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether this record owns a stored image file.
    pub fn has_image(&self) -> bool {
        !self.image_path.is_empty()
    }

    /// Stock level classification for the current quantity.
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.quantity)
    }
}

/// A product to be inserted into the store (no ID yet).
///
/// Image fields always start empty: the storage key embeds the ID, so the
/// image is attached with a follow-up update once the ID is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

impl NewProduct {
    /// Create a new product payload.
    pub fn new(name: impl Into<String>, quantity: u64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Partial update for an existing product.
///
/// `None` fields are left untouched. The store refreshes `updated_at` on
/// every update regardless of which fields are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<u64>,
    pub price: Option<f64>,
    pub image: Option<StoredImage>,
}

impl ProductUpdate {
    /// Update that only attaches an image.
    pub fn image(image: StoredImage) -> Self {
        Self {
            image: Some(image),
            ..Default::default()
        }
    }

    /// Whether the update carries no field changes.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Types
// ─────────────────────────────────────────────────────────────────────────────

/// An image file supplied by the user for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, used as the tail of the storage key.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Location of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Publicly resolvable URL.
    pub url: String,
    /// Object-store key.
    pub path: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Stock Level
// ─────────────────────────────────────────────────────────────────────────────

/// Severity class for a stock quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// Five units or fewer.
    Low,
    /// Six to ten units.
    Mid,
    /// More than ten units.
    High,
}

impl StockLevel {
    /// Classify a quantity.
    pub const fn from_quantity(quantity: u64) -> Self {
        if quantity <= 5 {
            Self::Low
        } else if quantity <= 10 {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Class name used by renderers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Render View-Model
// ─────────────────────────────────────────────────────────────────────────────

/// Placeholder shown for a product without a name.
pub const EMPTY_NAME_PLACEHOLDER: &str = "-";

/// One rendered row of the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    /// ID used by the row's edit and delete actions.
    pub id: String,
    /// Image URL, or empty for a blank image.
    pub image_url: String,
    /// Display name, `-` when the product has no name.
    pub name: String,
    pub quantity: u64,
    pub stock_level: StockLevel,
    /// Price formatted to two decimals.
    pub price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let name = if product.name.is_empty() {
            EMPTY_NAME_PLACEHOLDER.to_string()
        } else {
            product.name.clone()
        };
        Self {
            id: product.id.clone(),
            image_url: product.image_url.clone(),
            name,
            quantity: product.quantity,
            stock_level: product.stock_level(),
            price: format_price(product.price),
        }
    }
}

/// Format a price with exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}
