//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with the storage adapters. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use stockroom_core::{AppCore, Backend, StockroomConfig};

use crate::repositories::{FsObjectStore, SqliteProductRepository};

/// Factory for creating adapter instances.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a product repository from a pool.
    pub fn product_repository(pool: SqlitePool) -> Arc<SqliteProductRepository> {
        Arc::new(SqliteProductRepository::new(pool))
    }

    /// Create an object store rooted at `root`.
    pub fn object_store(
        root: impl Into<PathBuf>,
        public_base_url: Option<String>,
    ) -> Arc<FsObjectStore> {
        Arc::new(FsObjectStore::new(root).with_public_base_url(public_base_url))
    }

    /// Build the `Backend` container from concrete adapters.
    ///
    /// Callers that need adapter-specific operations (such as
    /// [`SqliteProductRepository::watch_database_file`]) keep their own
    /// `Arc` and pass a clone here.
    pub fn build_backend(
        products: Arc<SqliteProductRepository>,
        objects: Arc<FsObjectStore>,
    ) -> Backend {
        Backend::new(products, objects)
    }

    /// Build a complete `AppCore` from a pool and the resolved configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use stockroom_db::{CoreFactory, setup_database};
    ///
    /// let config = StockroomConfig::from_env(None)?;
    /// let pool = setup_database(&config.database_path()?).await?;
    /// let core = CoreFactory::build_app_core(pool, &config)?;
    /// ```
    pub fn build_app_core(pool: SqlitePool, config: &StockroomConfig) -> anyhow::Result<AppCore> {
        let objects = Self::object_store(config.storage_root()?, config.public_base_url.clone());
        let backend = Self::build_backend(Self::product_repository(pool), objects);
        Ok(AppCore::new(backend))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Create a product repository using this test database.
    pub fn product_repository(&self) -> Arc<SqliteProductRepository> {
        CoreFactory::product_repository(self.pool.clone())
    }
}
