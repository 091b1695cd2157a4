//! REST API handler for the contact form

use super::models::{ContactMessage, ContactResponse};
use crate::error::ApiResult;
use crate::state::SharedState;
use axum::extract::rejection::JsonRejection;
use axum::{routing::post, Json, Router};
use chrono::Local;

/// Creates routes for contact operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/contact", post(submit_contact))
}

/// Endpoint: POST /api/contact
/// Stamps the message with the receipt time and logs it. Nothing is stored.
async fn submit_contact(
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(mut contact) = body?;
    contact.validate()?;

    let received_at = Local::now().naive_local();
    contact.created_at = Some(received_at);

    tracing::info!(
        name = %contact.name,
        email = %contact.email,
        message = %contact.message,
        created_at = %received_at,
        "New contact message"
    );

    Ok(Json(ContactResponse::default()))
}
