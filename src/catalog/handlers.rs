//! REST API handlers for catalog queries

use super::models::{Category, Product, ProductQuery};
use crate::error::ApiResult;
use crate::state::SharedState;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/categories", get(list_categories))
}

/// Endpoint: GET /api/products?category=
///
/// The query is read as raw pairs so a repeated `category` key resolves to
/// its last value instead of failing.
async fn list_products(
    State(state): State<SharedState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(pairs) = pairs?;
    let query = ProductQuery::from_pairs(pairs);
    let products = state
        .catalog
        .list_products(query.filter())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(products))
}

/// Endpoint: GET /api/products/{id}
async fn get_product(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let product = state.catalog.get_product(id)?;
    Ok(Json(product.clone()))
}

/// Endpoint: GET /api/categories
async fn list_categories(State(state): State<SharedState>) -> Json<Vec<Category>> {
    Json(state.catalog.list_categories().to_vec())
}
