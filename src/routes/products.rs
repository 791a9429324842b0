use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    dto::products::{self, ProductPayload, ProductRecord},
    error::{AppError, AppResult},
    middleware::content_type::{JSON, check_content_type},
    response::ErrorBody,
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Location of a product's read endpoint.
pub fn product_location(id: i32) -> String {
    format!("/products/{id}")
}

/// Parses the `{id}` path segment. A segment that is not an `i32` cannot name
/// a stored product.
fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

fn not_found(raw: &str) -> AppError {
    AppError::NotFound(format!("Product with id '{raw}' was not found."))
}

#[utoipa::path(
    get,
    path = "/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products matching the first supplied filter", body = Vec<ProductRecord>),
        (status = 400, description = "Unknown category", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<ProductRecord>>> {
    tracing::info!("Request to list Products...");
    let query = ProductQuery::from_pairs(pairs);
    let filter = query.resolve()?;
    let results: Vec<ProductRecord> = product_service::list_products(&state, filter)
        .await?
        .iter()
        .map(products::serialize)
        .collect();

    tracing::info!(count = results.len(), "Products returned");
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ProductRecord),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ProductRecord>> {
    tracing::info!(product_id = %raw_id, "Request to Retrieve a product");
    let id = parse_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let product = product_service::get_product(&state, id).await?;

    tracing::info!(name = %product.name, "Returning product");
    Ok(Json(products::serialize(&product)))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body(content = ProductPayload, content_type = "application/json"),
    responses(
        (status = 201, description = "Product created", body = ProductRecord,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, description = "Invalid product body", body = ErrorBody),
        (status = 415, description = "Content-Type is not application/json", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    tracing::info!("Request to Create a Product...");
    check_content_type(&headers, JSON)?;

    let input = products::deserialize_body(&body)?;
    tracing::debug!(?input, "Processing");
    let product = product_service::create_product(&state, input).await?;

    let location = product_location(product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(products::serialize(&product)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body(content = ProductPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated product", body = ProductRecord),
        (status = 400, description = "Invalid product body", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 415, description = "Content-Type is not application/json", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ProductRecord>> {
    tracing::info!(product_id = %raw_id, "Request to Update a product");
    let id = parse_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    product_service::get_product(&state, id).await?;
    check_content_type(&headers, JSON)?;

    let input = products::deserialize_body(&body)?;
    tracing::debug!(?input, "Processing");
    let product = product_service::update_product(&state, id, input).await?;

    Ok(Json(products::serialize(&product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted, or never existed")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    tracing::info!(product_id = %raw_id, "Request to Delete a product");
    match parse_id(&raw_id) {
        Some(id) => product_service::delete_product(&state, id).await?,
        None => tracing::info!(product_id = %raw_id, "No such product, nothing to delete"),
    }
    Ok(StatusCode::NO_CONTENT)
}
