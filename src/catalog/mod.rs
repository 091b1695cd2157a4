//! Catalog Domain Module
//!
//! The fixed menu and its read-only lookups:
//! - Domain models (Product, Category)
//! - The compiled-in menu data
//! - The Catalog Store
//! - REST API handlers

mod data;
pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Category, Product};
pub use store::{Catalog, CatalogError};
