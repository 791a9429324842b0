use crate::{
    error::{AppError, AppResult},
    models::{NewProduct, Product},
    routes::params::ProductFilter,
    state::AppState,
};

pub async fn list_products(state: &AppState, filter: ProductFilter) -> AppResult<Vec<Product>> {
    let repo = &state.products;
    let products = match filter {
        ProductFilter::Name(name) => {
            tracing::info!(%name, "Find by name");
            repo.find_by_name(&name).await?
        }
        ProductFilter::Category(category) => {
            tracing::info!(%category, "Find by category");
            repo.find_by_category(category).await?
        }
        ProductFilter::Available(available) => {
            tracing::info!(available, "Find by available");
            repo.find_by_availability(available).await?
        }
        ProductFilter::All => {
            tracing::info!("Find all");
            repo.all().await?
        }
    };
    Ok(products)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    state
        .products
        .find(id)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn create_product(state: &AppState, input: NewProduct) -> AppResult<Product> {
    let product = state.products.create(input).await?;
    tracing::info!(product_id = product.id, "Product saved");
    Ok(product)
}

/// Full replace of the product's fields. The id always comes from the path.
pub async fn update_product(state: &AppState, id: i32, input: NewProduct) -> AppResult<Product> {
    let product = state.products.update(input.with_id(id)).await?;
    tracing::info!(product_id = product.id, "Product updated");
    Ok(product)
}

/// Deletes the product if it exists; a missing id is not an error.
pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    if state.products.find(id).await?.is_some() {
        tracing::info!(product_id = id, "Product found, deleting");
        state.products.delete(id).await?;
    }
    tracing::info!(product_id = id, "Product delete complete");
    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with id '{id}' was not found."))
}
