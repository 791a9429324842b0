mod common;

use axum::http::StatusCode;
use product_catalog::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, 200);
    assert_eq!(response.0.message, "Healthy");
}

#[tokio::test]
async fn health_endpoint_serves_status_json() {
    let app = common::app();
    let response = common::get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json, serde_json::json!({ "status": 200, "message": "Healthy" }));
}

#[tokio::test]
async fn index_serves_the_admin_page() {
    let app = common::app();
    let response = common::get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = String::from_utf8(common::body_bytes(response).await).unwrap();
    assert!(html.contains("<title>Product Catalog Administration</title>"));
    for id in ["product_id", "product_name", "product_category", "product_available"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
    }
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = common::app();
    let response = common::get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Not Found");
}

#[tokio::test]
async fn unsupported_method_returns_json_405() {
    let app = common::app();
    let response = common::delete(&app, "/products").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], 405);
}

#[tokio::test]
async fn response_carries_a_request_id() {
    let app = common::app();
    let response = common::get(&app, "/health").await;

    assert!(response.headers().get("x-request-id").is_some());
}
