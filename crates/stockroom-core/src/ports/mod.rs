//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem implementation details
//! - Stores are CRUD-focused; orchestration belongs in services
//! - Channel types stay behind `SnapshotStream`

pub mod object_store;
pub mod product_store;
pub mod renderer;
pub mod snapshot;

use std::sync::Arc;
use thiserror::Error;

pub use object_store::ObjectStore;
pub use product_store::ProductStore;
pub use renderer::ProductRenderer;
pub use snapshot::{SnapshotHub, SnapshotStream};

/// Container for the backend trait objects.
///
/// Lives in `stockroom-core` so services can be wired without depending on
/// `stockroom-db`.
#[derive(Clone)]
pub struct Backend {
    /// Document store holding product records.
    pub products: Arc<dyn ProductStore>,
    /// Object store holding product images.
    pub objects: Arc<dyn ObjectStore>,
}

impl Backend {
    /// Create a new backend container.
    pub fn new(products: Arc<dyn ProductStore>, objects: Arc<dyn ObjectStore>) -> Self {
        Self { products, objects }
    }
}

/// Domain-specific errors for document store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, connection, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors from object storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No object exists at the given key.
    #[error("Object not found: {0}")]
    NotFound(String),

    /// The key is not a valid relative object path.
    #[error("Invalid object path: {0}")]
    InvalidPath(String),

    /// Reading or writing the object failed.
    #[error("Object storage I/O error: {0}")]
    Io(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Document store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Object storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
