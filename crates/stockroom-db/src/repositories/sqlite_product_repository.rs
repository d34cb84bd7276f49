//! `SQLite` implementation of the `ProductStore` trait.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, QueryBuilder, Sqlite, SqlitePool};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use stockroom_core::{
    NewProduct, Product, ProductStore, ProductUpdate, RepositoryError, SnapshotHub,
    SnapshotStream,
};

use super::row_mappers::{PRODUCT_SELECT_COLUMNS, format_timestamp, quantity_to_db, row_to_product};

/// `SQLite` implementation of the `ProductStore` trait.
///
/// Every successful write is followed by a full snapshot published to live
/// subscribers of this repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
    hub: SnapshotHub,
}

impl SqliteProductRepository {
    /// Create a new `SQLite` product repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            hub: SnapshotHub::new(),
        }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.hub.subscriber_count()
    }

    async fn publish_snapshot(&self) {
        if self.hub.subscriber_count() == 0 {
            return;
        }
        match fetch_snapshot(&self.pool).await {
            Ok(products) => self.hub.publish(products),
            Err(e) => warn!(error = %e, "Failed to read snapshot after write"),
        }
    }

    /// Publish snapshots for commits made through other connections to
    /// the database file at `db_path`, such as another stockroom process.
    ///
    /// Polls `PRAGMA data_version` on a dedicated connection every
    /// `interval`. The baseline version is read before this returns, so any
    /// commit after the call is picked up. Abort the handle to stop.
    pub async fn watch_database_file(
        &self,
        db_path: &Path,
        interval: Duration,
    ) -> anyhow::Result<JoinHandle<()>> {
        let mut conn = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true)
            .connect()
            .await?;
        let mut last_version: i64 = sqlx::query_scalar("PRAGMA data_version")
            .fetch_one(&mut conn)
            .await?;

        let pool = self.pool.clone();
        let hub = self.hub.clone();
        debug!(path = %db_path.display(), ?interval, "Watching database for external changes");

        Ok(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;

                let version: i64 = match sqlx::query_scalar("PRAGMA data_version")
                    .fetch_one(&mut conn)
                    .await
                {
                    Ok(version) => version,
                    Err(e) => {
                        warn!(error = %e, "Failed to poll database version");
                        continue;
                    }
                };
                if version == last_version {
                    continue;
                }
                last_version = version;

                if hub.subscriber_count() == 0 {
                    continue;
                }
                match fetch_snapshot(&pool).await {
                    Ok(products) => hub.publish(products),
                    Err(e) => warn!(error = %e, "Failed to read snapshot after external change"),
                }
            }
        }))
    }
}

/// Read every product, newest first.
async fn fetch_snapshot(pool: &SqlitePool) -> Result<Vec<Product>, RepositoryError> {
    let query = format!(
        "SELECT {PRODUCT_SELECT_COLUMNS} FROM products ORDER BY created_at DESC, rowid DESC"
    );

    let rows = sqlx::query(&query)
        .fetch_all(pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    rows.iter().map(row_to_product).collect()
}

#[async_trait]
impl ProductStore for SqliteProductRepository {
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let now = format_timestamp(Utc::now());

        sqlx::query(
            "INSERT INTO products (id, name, quantity, price, image_url, image_path, created_at, updated_at) VALUES (?, ?, ?, ?, '', '', ?, ?)",
        )
        .bind(&id)
        .bind(&product.name)
        .bind(quantity_to_db(product.quantity))
        .bind(product.price)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let created = self.get(&id).await?;
        debug!(id = %created.id, "Inserted product row");
        self.publish_snapshot().await;
        Ok(created)
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), RepositoryError> {
        let mut query: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("UPDATE products SET updated_at = ");
        query.push_bind(format_timestamp(Utc::now()));

        if let Some(name) = &update.name {
            query.push(", name = ").push_bind(name.clone());
        }
        if let Some(quantity) = update.quantity {
            query.push(", quantity = ").push_bind(quantity_to_db(quantity));
        }
        if let Some(price) = update.price {
            query.push(", price = ").push_bind(price);
        }
        if let Some(image) = &update.image {
            query.push(", image_url = ").push_bind(image.url.clone());
            query.push(", image_path = ").push_bind(image.path.clone());
        }
        query.push(" WHERE id = ").push_bind(id.to_string());

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Product with ID {id}")));
        }

        self.publish_snapshot().await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Product with ID {id}")));
        }

        self.publish_snapshot().await;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {PRODUCT_SELECT_COLUMNS} FROM products WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Product with ID {id}")))?;

        row_to_product(&row)
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError> {
        fetch_snapshot(&self.pool).await
    }

    async fn subscribe(&self) -> Result<SnapshotStream, RepositoryError> {
        // Register first so a write racing the initial read still arrives
        let receiver = self.hub.receiver();
        let initial = fetch_snapshot(&self.pool).await?;
        debug!(count = initial.len(), "New product subscriber");
        Ok(SnapshotStream::new(initial, receiver))
    }
}
