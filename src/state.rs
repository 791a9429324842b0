use std::sync::Arc;

use crate::repository::ProductRepository;

/// Shared request context. Handlers hold no data of their own; every side
/// effect goes through `products`.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: impl ProductRepository + 'static) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}
