#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use product_catalog::{
    build_app,
    config::AppConfig,
    repository::{InMemoryProductRepository, ProductRepository},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn app_with(repo: impl ProductRepository + 'static) -> Router {
    build_app(AppState::new(repo), &AppConfig::default())
}

pub fn app() -> Router {
    app_with(InMemoryProductRepository::new())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a product through the API and return its JSON record.
pub async fn create(app: &Router, body: Value) -> Value {
    let response = send_json(app, "POST", "/products", &body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await
}
