use axum::{Json, http::StatusCode};

use crate::response::StatusMessage;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = StatusMessage),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<StatusMessage> {
    Json(StatusMessage::new(StatusCode::OK, "Healthy"))
}
