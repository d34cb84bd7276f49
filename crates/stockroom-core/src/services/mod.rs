//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod form;
mod inventory;
mod live_view;
pub mod search;

pub use app_core::AppCore;
pub use form::{CREATE_LABEL, FormController, FormMode, FormValues, SubmitOutcome, UPDATE_LABEL};
pub use inventory::{IMAGE_KEY_PREFIX, InventoryService, image_key};
pub use live_view::{LiveView, ProductCache};
pub use search::filter_products;
