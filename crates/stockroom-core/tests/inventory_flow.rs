//! End-to-end flows through the core services over in-memory adapters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use stockroom_core::{
    AppCore, Backend, FormValues, ImageUpload, NewProduct, ObjectStore, Product, ProductRenderer,
    ProductRow, ProductStore, ProductUpdate, RepositoryError, SnapshotHub, SnapshotStream,
    StorageError, SubmitOutcome,
};

#[derive(Default)]
struct MemoryProducts {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<u32>,
    hub: SnapshotHub,
}

impl MemoryProducts {
    fn snapshot(&self) -> Vec<Product> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    fn publish(&self) {
        self.hub.publish(self.snapshot());
    }
}

#[async_trait]
impl ProductStore for MemoryProducts {
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("p{next}")
        };
        // Distinct, increasing timestamps keep the ordering deterministic
        let now = Utc::now() + Duration::milliseconds(i64::from(*self.next_id.lock().unwrap()));
        let created = Product {
            id,
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
            image_url: String::new(),
            image_path: String::new(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        self.publish();
        Ok(created)
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), RepositoryError> {
        {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
            if let Some(name) = &update.name {
                row.name.clone_from(name);
            }
            if let Some(quantity) = update.quantity {
                row.quantity = quantity;
            }
            if let Some(price) = update.price {
                row.price = price;
            }
            if let Some(image) = &update.image {
                row.image_url.clone_from(&image.url);
                row.image_path.clone_from(&image.path);
            }
            row.updated_at = Utc::now();
        }
        self.publish();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(RepositoryError::NotFound(id.to_string()));
            }
        }
        self.publish();
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn subscribe(&self) -> Result<SnapshotStream, RepositoryError> {
        let receiver = self.hub.receiver();
        Ok(SnapshotStream::new(self.snapshot(), receiver))
    }
}

#[derive(Default)]
struct MemoryObjects {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryObjects {
    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl ObjectStore for MemoryObjects {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), bytes.to_vec());
        Ok(format!("memory://{path}"))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}

#[derive(Default)]
struct Frames(Mutex<Vec<Vec<ProductRow>>>);

impl ProductRenderer for Frames {
    fn render(&self, rows: &[ProductRow]) {
        self.0.lock().unwrap().push(rows.to_vec());
    }
}

impl Frames {
    fn last(&self) -> Vec<ProductRow> {
        self.0.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

fn setup() -> (AppCore, Arc<MemoryProducts>, Arc<MemoryObjects>) {
    let products = Arc::new(MemoryProducts::default());
    let objects = Arc::new(MemoryObjects::default());
    let backend = Backend::new(products.clone(), objects.clone());
    (AppCore::new(backend), products, objects)
}

#[tokio::test]
async fn create_edit_delete_keeps_images_in_step() {
    let (core, products, objects) = setup();
    let mut form = core.form();

    let outcome = form
        .submit(
            &FormValues::new("  Lamp ", "3", "19.5"),
            Some(ImageUpload::new("lamp.png", b"one".to_vec())),
        )
        .await
        .unwrap();
    let SubmitOutcome::Created(id) = outcome else {
        panic!("expected a created product, got {outcome:?}");
    };

    let created = core.inventory().find(&id).await.unwrap();
    assert_eq!(created.name, "Lamp");
    assert!(created.image_path.starts_with(&format!("products/{id}/")));
    assert_eq!(created.image_url, format!("memory://{}", created.image_path));
    assert_eq!(objects.keys(), vec![created.image_path.clone()]);

    // Replacing the image removes the old file
    form.edit(&created);
    form.submit(
        &FormValues::new("Lamp", "4", "21"),
        Some(ImageUpload::new("lamp2.png", b"two".to_vec())),
    )
    .await
    .unwrap();

    let edited = core.inventory().find(&id).await.unwrap();
    assert_eq!(edited.quantity, 4);
    assert_ne!(edited.image_path, created.image_path);
    assert_eq!(objects.keys(), vec![edited.image_path.clone()]);

    core.inventory().delete_product(&edited).await.unwrap();
    assert!(objects.keys().is_empty());
    assert!(products.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn live_view_follows_store_and_query() {
    let (core, _products, _objects) = setup();
    core.inventory()
        .create(&NewProduct::new("Apple", 2, 1.0))
        .await
        .unwrap();

    let frames = Arc::new(Frames::default());
    let mut view = core.live_view(frames.clone());
    let mut stream = core.inventory().subscribe().await.unwrap();

    let initial = stream.next().await.unwrap();
    view.apply_snapshot(initial);
    assert_eq!(frames.last().len(), 1);

    core.inventory()
        .create(&NewProduct::new("Banana", 12, 0.25))
        .await
        .unwrap();
    view.apply_snapshot(stream.next().await.unwrap());

    let names: Vec<String> = frames.last().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Banana", "Apple"]);

    view.set_query("APP");
    let rows = frames.last();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stock_level.as_str(), "low");
    assert_eq!(rows[0].price, "1.00");
}

#[tokio::test]
async fn export_contains_every_product_regardless_of_filter() {
    let (core, _products, _objects) = setup();
    core.inventory()
        .create(&NewProduct::new("Widget, large", 5, 9.99))
        .await
        .unwrap();
    core.inventory()
        .create(&NewProduct::new("Gadget", 1, 0.0))
        .await
        .unwrap();

    let csv = core.inventory().export_csv().await.unwrap();
    assert_eq!(
        csv,
        "Product Name,Quantity,Price,Image URL\nGadget,1,0.00,\n\"Widget, large\",5,9.99,"
    );
}
