//! Adapter implementations of the core storage ports.
//!
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod fs_object_store;
mod row_mappers;
mod sqlite_product_repository;

pub use fs_object_store::FsObjectStore;
pub use sqlite_product_repository::SqliteProductRepository;
