//! Inventory service - orchestrates product and image operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::csv;
use crate::domain::{ImageUpload, NewProduct, Product, ProductUpdate, StoredImage};
use crate::ports::{
    Backend, CoreError, ObjectStore, ProductStore, RepositoryError, SnapshotStream,
};

/// Prefix of every product image key.
pub const IMAGE_KEY_PREFIX: &str = "products";

/// Service for product operations.
///
/// Combines the document store and the object store so that callers never
/// leave a stored image without its owning record.
pub struct InventoryService {
    products: Arc<dyn ProductStore>,
    objects: Arc<dyn ObjectStore>,
}

impl InventoryService {
    /// Create a new inventory service over the given backend.
    pub fn new(backend: Backend) -> Self {
        Self {
            products: backend.products,
            objects: backend.objects,
        }
    }

    /// List all products, newest first.
    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        self.products.fetch_all().await.map_err(CoreError::from)
    }

    /// Get a product by ID.
    pub async fn get(&self, id: &str) -> Result<Option<Product>, CoreError> {
        match self.products.get(id).await {
            Ok(product) => Ok(Some(product)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Find a product by ID. Returns error if not found.
    pub async fn find(&self, id: &str) -> Result<Product, CoreError> {
        self.get(id)
            .await?
            .ok_or_else(|| CoreError::Validation(format!("Product not found: {id}")))
    }

    /// Start a live query over all products.
    pub async fn subscribe(&self) -> Result<SnapshotStream, CoreError> {
        self.products.subscribe().await.map_err(CoreError::from)
    }

    /// Insert a new product without an image.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, CoreError> {
        let created = self.products.insert(product).await?;
        info!(id = %created.id, name = %created.name, "Product created");
        Ok(created)
    }

    /// Apply a partial update to a product.
    pub async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), CoreError> {
        self.products.update(id, update).await?;
        info!(id, "Product updated");
        Ok(())
    }

    /// Upload an image for a product and return where it was stored.
    pub async fn upload_image(
        &self,
        product_id: &str,
        image: &ImageUpload,
    ) -> Result<StoredImage, CoreError> {
        self.upload_image_at(product_id, image, Utc::now().timestamp_millis())
            .await
    }

    /// Upload a new image for a product and delete the one it supersedes.
    ///
    /// The old file is kept when the new upload landed on the same key.
    pub async fn replace_image(
        &self,
        product_id: &str,
        image: &ImageUpload,
        old_path: &str,
    ) -> Result<StoredImage, CoreError> {
        self.replace_image_at(product_id, image, old_path, Utc::now().timestamp_millis())
            .await
    }

    async fn replace_image_at(
        &self,
        product_id: &str,
        image: &ImageUpload,
        old_path: &str,
        millis: i64,
    ) -> Result<StoredImage, CoreError> {
        let stored = self.upload_image_at(product_id, image, millis).await?;
        if stored.path == old_path {
            debug!(product_id, path = %old_path, "Image overwritten in place");
        } else {
            self.delete_image_if_exists(old_path).await;
        }
        Ok(stored)
    }

    async fn upload_image_at(
        &self,
        product_id: &str,
        image: &ImageUpload,
        millis: i64,
    ) -> Result<StoredImage, CoreError> {
        let path = image_key(product_id, millis, &image.file_name);
        let url = self.objects.upload(&path, &image.bytes).await?;
        debug!(product_id, %path, bytes = image.bytes.len(), "Image uploaded");
        Ok(StoredImage { url, path })
    }

    /// Delete a stored image, ignoring any failure.
    ///
    /// An empty path issues no storage call.
    pub async fn delete_image_if_exists(&self, path: &str) {
        if path.is_empty() {
            return;
        }
        if let Err(e) = self.objects.delete(path).await {
            debug!(%path, error = %e, "Ignoring image delete failure");
        }
    }

    /// Delete a product together with its stored image.
    ///
    /// The document delete and the image delete run concurrently. Only the
    /// document delete can fail the operation.
    pub async fn delete_product(&self, product: &Product) -> Result<(), CoreError> {
        let (deleted, ()) = tokio::join!(
            self.products.delete(&product.id),
            self.delete_image_if_exists(&product.image_path),
        );
        deleted?;
        info!(id = %product.id, "Product deleted");
        Ok(())
    }

    /// Encode a freshly fetched, unfiltered snapshot as CSV.
    pub async fn export_csv(&self) -> Result<String, CoreError> {
        let products = self.products.fetch_all().await?;
        debug!(count = products.len(), "Exporting products");
        Ok(csv::encode(&products))
    }
}

/// Storage key for a product image: `products/{id}/{millis}_{file_name}`.
///
/// Only the final component of `file_name` is kept.
pub fn image_key(product_id: &str, millis: i64, file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or("image");
    format!("{IMAGE_KEY_PREFIX}/{product_id}/{millis}_{base}")
}
