//! Live product list: cache, search text and renderer in one owner.
//!
//! Every snapshot from the store replaces the cache wholesale, then the
//! current search is re-applied and the list is redrawn.

use std::sync::Arc;

use tracing::debug;

use super::search::filter_products;
use crate::domain::{Product, ProductRow};
use crate::ports::{ProductRenderer, SnapshotStream};

/// In-memory mirror of the last snapshot pushed by the store.
///
/// Order is exactly as delivered: `created_at` descending.
#[derive(Debug, Clone, Default)]
pub struct ProductCache {
    products: Vec<Product>,
}

impl ProductCache {
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Overwrite the cache with a full snapshot.
    pub fn replace(&mut self, snapshot: Vec<Product>) {
        self.products = snapshot;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a cached product by ID.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Owns the cache and the search text, and redraws through a renderer.
pub struct LiveView {
    cache: ProductCache,
    query: String,
    renderer: Arc<dyn ProductRenderer>,
}

impl LiveView {
    /// Create an empty view drawing through `renderer`.
    pub fn new(renderer: Arc<dyn ProductRenderer>) -> Self {
        Self {
            cache: ProductCache::new(),
            query: String::new(),
            renderer,
        }
    }

    /// Start with `query` as the search text, without drawing.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Replace the cache with a pushed snapshot and redraw.
    pub fn apply_snapshot(&mut self, snapshot: Vec<Product>) {
        debug!(count = snapshot.len(), "Applying product snapshot");
        self.cache.replace(snapshot);
        self.refresh();
    }

    /// Change the search text and redraw.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn cache(&self) -> &ProductCache {
        &self.cache
    }

    /// Products currently visible under the search text.
    pub fn visible(&self) -> Vec<Product> {
        filter_products(self.cache.products(), &self.query)
    }

    /// Re-run the filter against the cache and redraw from scratch.
    pub fn refresh(&self) {
        let rows: Vec<ProductRow> = self.visible().iter().map(ProductRow::from).collect();
        self.renderer.render(&rows);
    }

    /// Consume a live query until the store goes away.
    pub async fn run(&mut self, mut stream: SnapshotStream) {
        while let Some(snapshot) = stream.next().await {
            self.apply_snapshot(snapshot);
        }
        debug!("Snapshot stream closed");
    }
}
