//! Integration tests for the restaurant HTTP API
//!
//! These tests drive the full router, including:
//! - Health and catalog queries
//! - Contact intake
//! - Purchase validation and rejection
//! - Static site delivery

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use sandwich_asere::catalog::Catalog;
use sandwich_asere::router::create_app_router;
use sandwich_asere::state::AppState;

/// Helper function to create a test app serving `static_dir`
fn create_app_with_static(static_dir: PathBuf) -> axum::Router {
    let state = Arc::new(AppState::new(Catalog::restaurant(), static_dir));
    create_app_router(state)
}

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    create_app_with_static(PathBuf::from("."))
}

/// Helper function to send a GET request and get the JSON response
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Helper function to send a raw body and get the JSON response
async fn post_raw(app: &axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Helper function to send a JSON request and get the response
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, serde_json::to_string(&body).unwrap()).await
}

fn purchase(items: Value, total: f64) -> Value {
    json!({
        "items": items,
        "total": total,
        "customer_name": "Yamilé Rodríguez",
        "customer_email": "yamile@example.com",
        "customer_phone": "305-555-0199"
    })
}

// =============================================================================
// Health & Catalog
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn test_list_all_products() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 13);

    let cubano = &products[0];
    assert_eq!(cubano["id"], 1);
    assert_eq!(cubano["price"], 12.99);
    assert_eq!(cubano["category"], "sandwiches");
    assert_eq!(cubano["image"], "/assets/sandwich-cubano.jpg");
    assert_eq!(cubano["popular"], true);
}

#[tokio::test]
async fn test_filter_products_by_category() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products?category=postres").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["category"] == "postres"));
}

#[tokio::test]
async fn test_unknown_category_is_empty_list() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products?category=tapas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_repeated_category_uses_last_value() {
    let app = create_test_app();

    let (status, body) =
        get_json(&app, "/api/products?category=bebidas&category=postres").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p["category"] == "postres"));
}

#[tokio::test]
async fn test_empty_category_means_all() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products?category=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn test_get_product() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products/8").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Café Cubano");
    assert_eq!(body["price"], 3.99);
}

#[tokio::test]
async fn test_get_missing_product() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Product not found" }));
}

#[tokio::test]
async fn test_get_product_non_integer_id() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products/cubano").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["path"]));
}

#[tokio::test]
async fn test_list_categories() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": "sandwiches", "name": "Sándwiches" },
            { "id": "platos", "name": "Platos Principales" },
            { "id": "bebidas", "name": "Bebidas" },
            { "id": "postres", "name": "Postres" }
        ])
    );
}

// =============================================================================
// Contact
// =============================================================================

#[tokio::test]
async fn test_contact_success() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/contact",
        json!({
            "name": "Ernesto",
            "email": "ernesto@example.com",
            "message": "Quisiera reservar una mesa para seis personas."
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Mensaje enviado correctamente" })
    );
}

#[tokio::test]
async fn test_contact_invalid_fields() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/contact",
        json!({
            "name": "E",
            "email": "ernesto-at-example.com",
            "message": "Hola"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 3);
    assert_eq!(detail[0]["loc"], json!(["body", "name"]));
    assert_eq!(detail[1]["loc"], json!(["body", "email"]));
    assert_eq!(detail[2]["loc"], json!(["body", "message"]));
}

#[tokio::test]
async fn test_contact_missing_field() {
    let app = create_test_app();

    let (status, body) = post_json(&app, "/api/contact", json!({ "name": "Ernesto" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

// =============================================================================
// Purchase
// =============================================================================

#[tokio::test]
async fn test_purchase_uses_server_prices() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        purchase(json!([{ "product_id": 1, "quantity": 2, "price": 0.01 }]), 25.98),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Pedido procesado correctamente");
    assert_eq!(body["total"], 25.98);

    let order_id = body["order_id"].as_str().unwrap();
    assert!(order_id.starts_with("ASR"));
    assert_eq!(order_id.len(), 3 + 14);
    assert!(order_id[3..].chars().all(|c| c.is_ascii_digit()));

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"], 1);
    assert_eq!(items[0]["product_name"], "Sándwich Cubano Clásico");
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(items[0]["unit_price"], 12.99);
    assert_eq!(items[0]["total_price"], 25.98);
}

#[tokio::test]
async fn test_purchase_unknown_product() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        purchase(json!([{ "product_id": 999, "quantity": 1, "price": 1.0 }]), 1.0),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Product 999 not found" }));
}

#[tokio::test]
async fn test_purchase_total_mismatch() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        purchase(
            json!([
                { "product_id": 4, "quantity": 1, "price": 16.99 },
                { "product_id": 9, "quantity": 2, "price": 6.99 }
            ]),
            30.99,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Total mismatch. Expected: $30.97, Received: $30.99"
    );
}

#[tokio::test]
async fn test_purchase_within_tolerance() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        purchase(json!([{ "product_id": 12, "quantity": 3, "price": 5.99 }]), 17.975),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 17.97);
}

#[tokio::test]
async fn test_purchase_zero_quantity_is_rejected() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        purchase(json!([{ "product_id": 1, "quantity": 0, "price": 12.99 }]), 12.99),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Invalid quantity for product 1" }));
}

#[tokio::test]
async fn test_purchase_negative_quantity_is_rejected() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        purchase(
            json!([
                { "product_id": 2, "quantity": 1, "price": 11.99 },
                { "product_id": 5, "quantity": -1, "price": 14.99 }
            ]),
            11.99,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid quantity for product 5");
}

#[tokio::test]
async fn test_purchase_invalid_customer() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/purchase",
        json!({
            "items": [{ "product_id": 1, "quantity": 1, "price": 12.99 }],
            "total": 12.99,
            "customer_name": "Y",
            "customer_email": "yamile"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_purchase_malformed_json() {
    let app = create_test_app();

    let (status, body) = post_raw(&app, "/api/purchase", "{\"items\": [".to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

#[tokio::test]
async fn test_repeated_purchase_same_result() {
    let app = create_test_app();
    let order = purchase(
        json!([
            { "product_id": 7, "quantity": 1, "price": 15.99 },
            { "product_id": 10, "quantity": 2, "price": 4.99 }
        ]),
        25.97,
    );

    let (first_status, first) = post_json(&app, "/api/purchase", order.clone()).await;
    let (second_status, second) = post_json(&app, "/api/purchase", order).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first["items"], second["items"]);
    assert_eq!(first["total"], second["total"]);
}

// =============================================================================
// Static site
// =============================================================================

#[tokio::test]
async fn test_static_site() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Sandwich Asere</h1>").unwrap();
    std::fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
    std::fs::create_dir(dir.path().join("js")).unwrap();
    std::fs::write(dir.path().join("js").join("main.js"), "console.log('hola');").unwrap();

    let app = create_app_with_static(dir.path().to_path_buf());

    for (uri, content_type, expected) in [
        ("/", "text/html", "<h1>Sandwich Asere</h1>"),
        ("/styles.css", "text/css", "body { margin: 0; }"),
        ("/js/main.js", "javascript", "console.log('hola');"),
    ] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        let header = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(header.contains(content_type), "{} served as {}", uri, header);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(body_bytes.to_vec()).unwrap(), expected);
    }
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_app_with_static(dir.path().to_path_buf());

    let request = Request::builder()
        .uri("/assets/flan.jpg")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/api/categories")
        .header("origin", "https://pedidos.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "https://pedidos.example.com"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_preflight_echoes_request() {
    let app = create_test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/purchase")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(headers.get("access-control-allow-methods").unwrap(), "POST");
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        "content-type"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}
