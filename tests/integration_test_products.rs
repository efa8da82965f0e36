mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create_tomato(app: &TestApp) -> String {
    let response = app.router.clone().oneshot(json_request("POST", "/products", json!({
        "name": "Tomato",
        "telugu_name": "టమాటో",
        "description": "fresh",
        "category": "veg",
        "image": "t.png",
        "variants": [{"variantName": "1kg", "price": 40, "stock": 100}]
    }))).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_body(response).await;
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_product_with_variants_and_list() {
    let app = TestApp::new().await;
    let product_id = create_tomato(&app).await;

    let response = app.router.clone().oneshot(empty_request("GET", "/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products = parse_body(response).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 1);

    let tomato = &products[0];
    assert_eq!(tomato["id"], product_id.as_str());
    assert_eq!(tomato["name"], "Tomato");
    assert_eq!(tomato["telugu_name"], "టమాటో");

    let variants = tomato["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0]["variantName"], "1kg");
    assert_eq!(variants[0]["price"], 40.0);
    assert_eq!(variants[0]["stock"], 100);
    assert_eq!(variants[0]["productId"], product_id.as_str());
}

#[tokio::test]
async fn test_list_products_empty() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(empty_request("GET", "/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products = parse_body(response).await;
    assert_eq!(products.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = TestApp::new().await;
    let product_id = create_tomato(&app).await;

    let response = app.router.clone()
        .oneshot(empty_request("GET", &format!("/products/{}", product_id)))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product = parse_body(response).await;
    assert_eq!(product["name"], "Tomato");
    assert_eq!(product["category"], "veg");
}

#[tokio::test]
async fn test_get_product_not_found() {
    let app = TestApp::new().await;

    let response = app.router.clone()
        .oneshot(empty_request("GET", &format!("/products/{}", uuid::Uuid::new_v4())))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_product_malformed_id() {
    let app = TestApp::new().await;

    let response = app.router.clone()
        .oneshot(empty_request("GET", "/products/not-a-uuid"))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_variant_set() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(json_request("POST", "/products", json!({
        "name": "Onion",
        "telugu_name": "ఉల్లిపాయ",
        "description": "red onions",
        "category": "veg",
        "image": "o.png",
        "variants": [
            {"variantName": "1kg", "price": 30, "stock": 50},
            {"variantName": "5kg", "price": 140, "stock": 20}
        ]
    }))).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let product_id = parse_body(response).await["id"].as_str().unwrap().to_string();

    let response = app.router.clone().oneshot(json_request(
        "PUT",
        &format!("/products/{}", product_id),
        json!({
            "description": "fresh red onions",
            "variants": [{"variantName": "2kg", "price": 55, "stock": 80}]
        }),
    )).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = parse_body(response).await;
    assert_eq!(updated["description"], "fresh red onions");
    assert!(updated["updatedAt"].is_string());

    // The old set is gone in full; only the replacement remains.
    let response = app.router.clone().oneshot(empty_request("GET", "/productVariants")).await.unwrap();
    let variants = parse_body(response).await;
    let for_product: Vec<&Value> = variants.as_array().unwrap().iter()
        .filter(|v| v["productId"] == product_id.as_str())
        .collect();
    assert_eq!(for_product.len(), 1);
    assert_eq!(for_product[0]["variantName"], "2kg");
    assert_eq!(for_product[0]["price"], 55.0);
}

#[tokio::test]
async fn test_update_with_omitted_variants_keeps_existing_set() {
    let app = TestApp::new().await;
    let product_id = create_tomato(&app).await;

    let response = app.router.clone().oneshot(json_request(
        "PUT",
        &format!("/products/{}", product_id),
        json!({"name": "Country Tomato"}),
    )).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.router.clone().oneshot(empty_request("GET", "/products")).await.unwrap();
    let products = parse_body(response).await;
    let product = &products.as_array().unwrap()[0];
    assert_eq!(product["name"], "Country Tomato");
    assert_eq!(product["variants"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_with_empty_variants_clears_set() {
    let app = TestApp::new().await;
    let product_id = create_tomato(&app).await;

    let response = app.router.clone().oneshot(json_request(
        "PUT",
        &format!("/products/{}", product_id),
        json!({"variants": []}),
    )).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.router.clone().oneshot(empty_request("GET", "/products")).await.unwrap();
    let products = parse_body(response).await;
    let product = &products.as_array().unwrap()[0];
    assert_eq!(product["variants"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_product_not_found() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(json_request(
        "PUT",
        &format!("/products/{}", uuid::Uuid::new_v4()),
        json!({"name": "Ghost"}),
    )).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_cascades_to_variants() {
    let app = TestApp::new().await;
    let product_id = create_tomato(&app).await;

    let response = app.router.clone()
        .oneshot(empty_request("DELETE", &format!("/products/{}", product_id)))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = app.router.clone()
        .oneshot(empty_request("GET", &format!("/products/{}", product_id)))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // No orphaned variants survive the cascade.
    let response = app.router.clone().oneshot(empty_request("GET", "/productVariants")).await.unwrap();
    let variants = parse_body(response).await;
    assert!(variants.as_array().unwrap().iter()
        .all(|v| v["productId"] != product_id.as_str()));
}

#[tokio::test]
async fn test_delete_product_not_found() {
    let app = TestApp::new().await;

    let response = app.router.clone()
        .oneshot(empty_request("DELETE", &format!("/products/{}", uuid::Uuid::new_v4())))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_missing_field_rejected() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(json_request("POST", "/products", json!({
        "name": "Incomplete"
    }))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
