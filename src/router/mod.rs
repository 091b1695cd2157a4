//! Routing module for the restaurant backend

pub mod health;
pub mod site;

use crate::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%method, %uri, "REQ");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, status = %res.status(), "RES (Error)");
        }
        res
    });

    // Middleware: CORS. Echoes the caller's origin, method and headers so
    // credentialed requests from any origin are accepted.
    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Routes
    Router::new()
        .merge(health::routes())
        .merge(crate::catalog::routes())
        .merge(crate::contact::routes())
        .merge(crate::purchase::routes())
        .merge(site::routes(&state.static_dir))
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
