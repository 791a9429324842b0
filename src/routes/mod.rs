use axum::{
    Router,
    http::Uri,
    routing::get,
};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod health;
pub mod index;
pub mod params;
pub mod products;

// Build the router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health_check))
        .merge(products::router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("{} was not found on this server.", uri.path()))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
