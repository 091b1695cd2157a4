//! Liveness endpoint

use crate::state::SharedState;
use axum::{routing::get, Json, Router};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Body of `GET /api/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: NaiveDateTime,
}

pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().naive_local(),
    })
}
