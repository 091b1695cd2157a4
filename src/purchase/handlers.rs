//! REST API handler for order submission

use super::models::{PurchaseRequest, PurchaseResponse};
use super::validator::PurchaseValidator;
use crate::error::ApiResult;
use crate::state::SharedState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};

/// Creates routes for purchase operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/purchase", post(process_purchase))
}

/// Endpoint: POST /api/purchase
/// Re-prices the cart from the catalog and accepts or rejects it as a whole.
async fn process_purchase(
    State(state): State<SharedState>,
    body: Result<Json<PurchaseRequest>, JsonRejection>,
) -> ApiResult<Json<PurchaseResponse>> {
    let Json(request) = body?;
    request.validate()?;

    let order = PurchaseValidator::new(&state.catalog).validate(&request)?;

    Ok(Json(order.into()))
}
