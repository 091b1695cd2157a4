//! Contact Intake Module
//!
//! Accepts contact-form messages, stamps and logs them.

pub mod handlers;
pub mod models;

pub use handlers::routes;
pub use models::{ContactMessage, ContactResponse};
