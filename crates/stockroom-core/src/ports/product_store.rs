//! Product document store trait definition.
//!
//! This port defines the interface for product persistence and the live
//! query over the product collection.

use async_trait::async_trait;

use super::{RepositoryError, SnapshotStream};
use crate::domain::{NewProduct, Product, ProductUpdate};

/// Document store for product records.
///
/// Implementations own ID assignment and write timestamps: `insert` stamps
/// `created_at` and `updated_at` with the same write time, `update` refreshes
/// `updated_at`.
///
/// Every listing (`fetch_all` and each snapshot of `subscribe`) is ordered by
/// `created_at` descending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product and return it with its assigned ID.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Apply a partial update to an existing product.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), RepositoryError>;

    /// Delete a product by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Get a product by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn get(&self, id: &str) -> Result<Product, RepositoryError>;

    /// One-shot fetch of the whole collection.
    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Start a live query over the whole collection.
    ///
    /// The stream yields the current snapshot first, then a full snapshot
    /// after every change.
    async fn subscribe(&self) -> Result<SnapshotStream, RepositoryError>;
}
