use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Category, NewProduct, Product},
};

pub mod postgres;

pub use postgres::PgProductRepository;

/// Persistence collaborator for products.
///
/// Listing methods return products ordered by id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its store-assigned id.
    async fn create(&self, input: NewProduct) -> AppResult<Product>;

    /// Fetch a product by id, `None` when it does not exist.
    async fn find(&self, id: i32) -> AppResult<Option<Product>>;

    /// Replace every mutable field of the product identified by `product.id`.
    async fn update(&self, product: Product) -> AppResult<Product>;

    /// Remove a product. Removing an unknown id is not an error.
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn all(&self) -> AppResult<Vec<Product>>;

    /// Exact name match.
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>>;

    async fn find_by_category(&self, category: Category) -> AppResult<Vec<Product>>;

    async fn find_by_availability(&self, available: bool) -> AppResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    products: BTreeMap<i32, Product>,
}

/// Process-local repository used when no database is configured.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        let store = self.store.read().await;
        store
            .products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> AppResult<Product> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal(anyhow!("product id space exhausted")))?;
        store.last_id = id;
        let product = input.with_id(id);
        store.products.insert(product.id, product.clone());

        tracing::debug!(product_id = product.id, "stored product");
        Ok(product)
    }

    async fn find(&self, id: i32) -> AppResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let mut store = self.store.write().await;
        match store.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product)
            }
            None => Err(AppError::NotFound(format!(
                "Product with id '{}' was not found.",
                product.id
            ))),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut store = self.store.write().await;
        store.products.remove(&id);
        Ok(())
    }

    async fn all(&self) -> AppResult<Vec<Product>> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        Ok(self.select(|p| p.name == name).await)
    }

    async fn find_by_category(&self, category: Category) -> AppResult<Vec<Product>> {
        Ok(self.select(|p| p.category == category).await)
    }

    async fn find_by_availability(&self, available: bool) -> AppResult<Vec<Product>> {
        Ok(self.select(|p| p.available == available).await)
    }
}
