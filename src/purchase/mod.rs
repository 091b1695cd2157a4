//! Purchase Domain Module
//!
//! The security-critical checkout path:
//! - Domain models (CartItem, PurchaseRequest, ValidatedItem, Order)
//! - The Purchase Validator (re-pricing and total comparison)
//! - Order id and log helpers
//! - REST API handler

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod validator;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartItem, Order, PurchaseRequest, PurchaseResponse, ValidatedItem};
pub use validator::{PurchaseError, PurchaseValidator};
