//! Product form controller - one form for both creating and editing.
//!
//! The form starts in create mode. Choosing a product switches it to edit
//! mode pre-filled with that product; a successful save or a cancel returns
//! it to create mode with cleared fields.

use std::sync::Arc;

use tracing::debug;

use super::InventoryService;
use crate::domain::{ImageUpload, NewProduct, Product, ProductUpdate, parse_price, parse_quantity};
use crate::ports::CoreError;

/// Action label shown in create mode.
pub const CREATE_LABEL: &str = "Add product";

/// Action label shown in edit mode.
pub const UPDATE_LABEL: &str = "Update product";

/// Which record, if any, the form is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting creates a new product.
    #[default]
    Create,
    /// Submitting updates an existing product.
    Edit {
        /// Target product ID.
        id: String,
        /// Key of the image currently stored for the product, or empty.
        image_path: String,
    },
}

/// Raw form field values as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The name was blank; nothing was written.
    Skipped,
    /// A new product was created with this ID.
    Created(String),
    /// The product with this ID was updated.
    Updated(String),
}

/// Create/edit state machine over the inventory service.
///
/// `submit` takes `&mut self`, so a controller can only run one save at a
/// time.
pub struct FormController {
    inventory: Arc<InventoryService>,
    mode: FormMode,
    values: FormValues,
}

impl FormController {
    /// Create a controller in create mode with empty fields.
    pub fn new(inventory: Arc<InventoryService>) -> Self {
        Self {
            inventory,
            mode: FormMode::Create,
            values: FormValues::default(),
        }
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current field values.
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Mutable access to the field values, for adapters that edit fields
    /// one at a time.
    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    /// Label of the submit action for the current mode.
    pub const fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => CREATE_LABEL,
            FormMode::Edit { .. } => UPDATE_LABEL,
        }
    }

    /// Whether cancelling is meaningful (edit mode only).
    pub const fn can_cancel(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Switch to edit mode pre-filled with `product`.
    pub fn edit(&mut self, product: &Product) {
        self.mode = FormMode::Edit {
            id: product.id.clone(),
            image_path: product.image_path.clone(),
        };
        self.values = FormValues {
            name: product.name.clone(),
            quantity: product.quantity.to_string(),
            price: product.price.to_string(),
        };
    }

    /// Return to create mode without writing.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Submit the current field values.
    pub async fn submit_current(
        &mut self,
        image: Option<ImageUpload>,
    ) -> Result<SubmitOutcome, CoreError> {
        let values = self.values.clone();
        self.submit(&values, image).await
    }

    /// Save `values` according to the current mode.
    ///
    /// A name that is blank after trimming skips the save without touching
    /// the backend or the mode. Backend errors propagate and leave the form
    /// as it was.
    pub async fn submit(
        &mut self,
        values: &FormValues,
        image: Option<ImageUpload>,
    ) -> Result<SubmitOutcome, CoreError> {
        let name = values.name.trim();
        if name.is_empty() {
            debug!("Skipping submit with blank name");
            return Ok(SubmitOutcome::Skipped);
        }
        let quantity = parse_quantity(&values.quantity);
        let price = parse_price(&values.price);

        let outcome = match &self.mode {
            FormMode::Create => {
                let created = self
                    .inventory
                    .create(&NewProduct::new(name, quantity, price))
                    .await?;

                // The storage key embeds the new ID, so the image goes in a second write
                if let Some(image) = image {
                    let stored = self.inventory.upload_image(&created.id, &image).await?;
                    self.inventory
                        .update(&created.id, &ProductUpdate::image(stored))
                        .await?;
                }
                SubmitOutcome::Created(created.id)
            }
            FormMode::Edit { id, image_path } => {
                let mut update = ProductUpdate {
                    name: Some(name.to_string()),
                    quantity: Some(quantity),
                    price: Some(price),
                    image: None,
                };
                if let Some(image) = image {
                    let stored = self.inventory.replace_image(id, &image, image_path).await?;
                    update.image = Some(stored);
                }
                self.inventory.update(id, &update).await?;
                SubmitOutcome::Updated(id.clone())
            }
        };

        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.values = FormValues::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::object_store::MockObjectStore;
    use crate::ports::product_store::MockProductStore;
    use crate::ports::{Backend, RepositoryError, StorageError};
    use chrono::Utc;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn stored_product(id: &str, image_path: &str) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: "Widget".to_string(),
            quantity: 7,
            price: 3.25,
            image_url: if image_path.is_empty() {
                String::new()
            } else {
                format!("http://files/{image_path}")
            },
            image_path: image_path.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn controller(products: MockProductStore, objects: MockObjectStore) -> FormController {
        let backend = Backend::new(Arc::new(products), Arc::new(objects));
        FormController::new(Arc::new(InventoryService::new(backend)))
    }

    #[tokio::test]
    async fn test_blank_name_is_skipped_without_backend_calls() {
        // Mocks without expectations panic on any call
        let mut form = controller(MockProductStore::new(), MockObjectStore::new());

        let outcome = form
            .submit(&FormValues::new("   ", "3", "1.0"), None)
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[tokio::test]
    async fn test_blank_name_in_edit_mode_keeps_edit_mode() {
        let mut form = controller(MockProductStore::new(), MockObjectStore::new());
        form.edit(&stored_product("p1", ""));

        let outcome = form
            .submit(&FormValues::new("", "1", "1"), None)
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert!(form.can_cancel());
        assert_eq!(form.values().name, "Widget");
    }

    #[tokio::test]
    async fn test_create_normalizes_input() {
        let mut products = MockProductStore::new();
        products
            .expect_insert()
            .withf(|p| p.name == "Gadget" && p.quantity == 0 && p.price.abs() < f64::EPSILON)
            .times(1)
            .returning(|_| Ok(stored_product("new-id", "")));
        let mut form = controller(products, MockObjectStore::new());

        let outcome = form
            .submit(&FormValues::new("  Gadget ", "abc", ""), None)
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Created("new-id".to_string()));
        assert_eq!(form.values(), &FormValues::default());
    }

    #[tokio::test]
    async fn test_create_with_image_writes_twice_in_order() {
        let mut seq = Sequence::new();
        let mut products = MockProductStore::new();
        let mut objects = MockObjectStore::new();

        products
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(stored_product("new-id", "")));
        objects
            .expect_upload()
            .withf(|path, _| path.starts_with("products/new-id/") && path.ends_with("_cat.png"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|path, _| Ok(format!("http://files/{path}")));
        products
            .expect_update()
            .withf(|id, update| {
                id == "new-id"
                    && update.name.is_none()
                    && update
                        .image
                        .as_ref()
                        .is_some_and(|img| img.url == format!("http://files/{}", img.path))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut form = controller(products, objects);
        let outcome = form
            .submit(
                &FormValues::new("Cat toy", "2", "4.5"),
                Some(ImageUpload::new("cat.png", vec![1, 2, 3])),
            )
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Created("new-id".to_string()));
    }

    #[test]
    fn test_edit_prefills_and_cancel_resets() {
        let mut form = controller(MockProductStore::new(), MockObjectStore::new());
        assert_eq!(form.submit_label(), CREATE_LABEL);
        assert!(!form.can_cancel());

        form.edit(&stored_product("p1", "products/p1/1_a.png"));
        assert_eq!(form.submit_label(), UPDATE_LABEL);
        assert_eq!(
            form.mode(),
            &FormMode::Edit {
                id: "p1".to_string(),
                image_path: "products/p1/1_a.png".to_string(),
            }
        );
        assert_eq!(form.values(), &FormValues::new("Widget", "7", "3.25"));

        form.cancel();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.submit_label(), CREATE_LABEL);
        assert_eq!(form.values(), &FormValues::default());
    }

    #[tokio::test]
    async fn test_edit_without_image_single_update() {
        let mut products = MockProductStore::new();
        products
            .expect_update()
            .with(
                eq("p1"),
                eq(ProductUpdate {
                    name: Some("Renamed".to_string()),
                    quantity: Some(9),
                    price: Some(1.5),
                    image: None,
                }),
            )
            .times(1)
            .returning(|_, _| Ok(()));
        let mut objects = MockObjectStore::new();
        objects.expect_delete().times(0);

        let mut form = controller(products, objects);
        form.edit(&stored_product("p1", "products/p1/1_a.png"));
        form.values_mut().name = "Renamed".to_string();
        form.values_mut().quantity = "9".to_string();
        form.values_mut().price = "1.5".to_string();

        let outcome = form.submit_current(None).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated("p1".to_string()));
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[tokio::test]
    async fn test_edit_with_image_replaces_old_file() {
        let mut seq = Sequence::new();
        let mut products = MockProductStore::new();
        let mut objects = MockObjectStore::new();

        objects
            .expect_upload()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|path, _| Ok(format!("http://files/{path}")));
        objects
            .expect_delete()
            .with(eq("products/p1/1_old.png"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|path| Err(StorageError::NotFound(path.to_string())));
        products
            .expect_update()
            .withf(|id, update| {
                id == "p1"
                    && update.name.as_deref() == Some("Widget")
                    && update
                        .image
                        .as_ref()
                        .is_some_and(|img| img.path.ends_with("_new.png"))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut form = controller(products, objects);
        form.edit(&stored_product("p1", "products/p1/1_old.png"));

        let outcome = form
            .submit_current(Some(ImageUpload::new("new.png", vec![9])))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated("p1".to_string()));
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_form_state() {
        let mut products = MockProductStore::new();
        products
            .expect_update()
            .returning(|id, _| Err(RepositoryError::NotFound(id.to_string())));

        let mut form = controller(products, MockObjectStore::new());
        form.edit(&stored_product("p1", ""));

        let result = form.submit_current(None).await;
        assert!(result.is_err());
        assert!(form.can_cancel());
        assert_eq!(form.values().name, "Widget");
    }
}
