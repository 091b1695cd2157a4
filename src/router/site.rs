//! Static site delivery
//!
//! The landing page, the stylesheet and everything under `/js` and
//! `/assets` are served from the static directory as-is.

use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Creates routes for the static site rooted at `static_dir`
pub fn routes(static_dir: &Path) -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route_service("/styles.css", ServeFile::new(static_dir.join("styles.css")))
        .nest_service("/js", ServeDir::new(static_dir.join("js")))
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
}

/// Endpoint: GET /
async fn index(State(state): State<SharedState>) -> Result<Html<String>, StatusCode> {
    state.load_index_html().await.map(Html)
}
