//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Database pool and product store (via stockroom-db)
//! - Filesystem object store (via stockroom-db)
//! - Core services (via stockroom-core)
//!
//! Command handlers receive the fully-composed context and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use stockroom_core::{AppCore, StockroomConfig};
use stockroom_db::{CoreFactory, SqliteProductRepository, setup_database};
use tokio::task::JoinHandle;
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data directory given with `--data-dir`.
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve the full runtime configuration from the environment.
    pub fn resolve(&self) -> Result<StockroomConfig> {
        Ok(StockroomConfig::from_env(self.data_dir.as_deref())?)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Concrete product store, kept for the external change watcher.
    pub products: Arc<SqliteProductRepository>,
    /// Resolved configuration.
    pub config: StockroomConfig,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the resolved configuration.
    pub const fn config(&self) -> &StockroomConfig {
        &self.config
    }

    /// Start publishing snapshots for commits made by other processes.
    pub async fn watch_external_changes(&self) -> Result<JoinHandle<()>> {
        let db_path = self.config.database_path()?;
        self.products
            .watch_database_file(&db_path, self.config.watch_interval)
            .await
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves paths and settings
/// 2. Creates the database pool with the schema in place
/// 3. Creates the product and object stores
/// 4. Assembles the AppCore
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let resolved = config.resolve()?;
    debug!(data_root = %resolved.data_root.display(), "Resolved configuration");

    let pool = setup_database(&resolved.database_path()?).await?;
    let products = CoreFactory::product_repository(pool);

    bootstrap_with(products, resolved)
}

/// Bootstrap with a custom product store (for testing).
pub fn bootstrap_with(
    products: Arc<SqliteProductRepository>,
    config: StockroomConfig,
) -> Result<CliContext> {
    let objects =
        CoreFactory::object_store(config.storage_root()?, config.public_base_url.clone());
    let backend = CoreFactory::build_backend(Arc::clone(&products), objects);

    Ok(CliContext {
        app: AppCore::new(backend),
        products,
        config,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::test_context;

    #[tokio::test]
    async fn test_bootstrap_with_creates_storage_root() {
        let (ctx, temp) = test_context().await;
        assert!(temp.path().join("storage").is_dir());
        assert!(ctx.app().inventory().list().await.unwrap().is_empty());
    }
}
