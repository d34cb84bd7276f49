//! `AppCore` - the primary application facade.
//!
//! Adapters construct one `AppCore` at their composition root and hand out
//! forms and live views from it.

use std::sync::Arc;

use super::{FormController, InventoryService, LiveView};
use crate::ports::{Backend, ProductRenderer};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let backend = Backend::new(product_store, object_store);
/// let core = AppCore::new(backend);
///
/// let products = core.inventory().list().await?;
/// let mut form = core.form();
/// ```
pub struct AppCore {
    inventory: Arc<InventoryService>,
}

impl AppCore {
    /// Create a new `AppCore` over the given backend.
    pub fn new(backend: Backend) -> Self {
        Self {
            inventory: Arc::new(InventoryService::new(backend)),
        }
    }

    /// Access the inventory service.
    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    /// A fresh form controller in create mode.
    pub fn form(&self) -> FormController {
        FormController::new(Arc::clone(&self.inventory))
    }

    /// A fresh, empty live view drawing through `renderer`.
    pub fn live_view(&self, renderer: Arc<dyn ProductRenderer>) -> LiveView {
        LiveView::new(renderer)
    }
}
