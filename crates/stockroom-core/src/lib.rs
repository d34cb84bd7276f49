#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod csv;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::StockroomConfig;
pub use domain::{
    ImageUpload, NewProduct, Product, ProductRow, ProductUpdate, StockLevel, StoredImage,
    format_price, parse_number_or_zero,
};
pub use paths::PathError;
pub use ports::{
    Backend, CoreError, ObjectStore, ProductRenderer, ProductStore,
    RepositoryError, SnapshotHub, SnapshotStream, StorageError,
};
pub use services::{
    AppCore, FormController, FormMode, FormValues, InventoryService, LiveView, ProductCache,
    SubmitOutcome, filter_products,
};

