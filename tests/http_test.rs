use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use catalog_service::config::CatalogConfig;
use catalog_service::http::{router, AppState};
use catalog_service::lifecycle::CatalogSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(system: &CatalogSystem) -> Router {
    router(AppState::from_system(system), "/api")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_category_lifecycle() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = app(&system);

    let (status, created) = send(&app, Method::POST, "/api/categories", Some(json!({ "name": "Tools" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({ "id": 1, "name": "Tools" }));

    let (status, fetched) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, removed) = send(&app, Method::DELETE, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, created);

    let (status, body) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Category"));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_with_unknown_supplier_is_not_found() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = app(&system);
    send(&app, Method::POST, "/api/categories", Some(json!({ "name": "Tools" }))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Drill", "price": 50, "supplierId": 999, "categoryId": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Supplier"));

    let (_, products) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(products, json!([]));
}

#[tokio::test]
async fn test_patch_supplier_city() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = app(&system);
    send(&app, Method::POST, "/api/suppliers", Some(json!({ "name": "Acme", "city": "Oslo" }))).await;

    let (status, patched) = send(
        &app,
        Method::PATCH,
        "/api/suppliers/1",
        Some(json!([{ "op": "replace", "path": "city", "value": "Berlin" }])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched, json!({ "id": 1, "name": "Acme", "city": "Berlin" }));
}

#[tokio::test]
async fn test_product_create_replace_and_filter() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = app(&system);
    send(&app, Method::POST, "/api/categories", Some(json!({ "name": "Tools" }))).await;
    send(&app, Method::POST, "/api/categories", Some(json!({ "name": "Garden" }))).await;
    send(&app, Method::POST, "/api/suppliers", Some(json!({ "name": "Acme", "city": "Oslo" }))).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Drill", "price": 49.99, "supplierId": 1, "categoryId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["price"].as_f64(), Some(49.99));

    let (status, replaced) = send(
        &app,
        Method::PUT,
        "/api/products",
        Some(json!({ "id": 1, "name": "Rake", "price": 20, "supplierId": 1, "categoryId": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["name"], "Rake");

    let (status, in_garden) = send(&app, Method::GET, "/api/products/category/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(in_garden.as_array().unwrap().len(), 1);

    let (_, in_tools) = send(&app, Method::GET, "/api/products/category/1", None).await;
    assert_eq!(in_tools, json!([]));

    let (status, _) = send(&app, Method::GET, "/api/products/supplier/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_requests() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = app(&system);

    let (status, _) = send(&app, Method::GET, "/api/categories/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/categories/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing fields default to empty and fail validation.
    let (status, body) = send(&app, Method::POST, "/api/suppliers", Some(json!({ "name": "Acme" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("city"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Drill", "price": 0.5, "supplierId": 1, "categoryId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/categories")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bad_patch_is_server_error() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = app(&system);
    send(&app, Method::POST, "/api/categories", Some(json!({ "name": "Tools" }))).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/categories/1",
        Some(json!([{ "op": "replace", "path": "/colour", "value": "red" }])),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/categories/1",
        Some(json!([{ "op": "move", "from": "/name", "path": "/title" }])),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/categories/9",
        Some(json!([{ "op": "replace", "path": "/name", "value": "x" }])),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, unchanged) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(unchanged["name"], "Tools");
}

#[tokio::test]
async fn test_routes_follow_configured_prefix() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let app = router(AppState::from_system(&system), "");

    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
