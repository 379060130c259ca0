use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// The service only talks to this trait; storage engines plug in behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch a product by id, failing with `NotFound` when it does not exist
    async fn get(&self, id: &str) -> ProductResult<Product>;

    /// Insert or update a product keyed by its id, returning the stored value
    async fn save(&self, product: &Product) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, id: &str) -> ProductResult<Product> {
        let products = self.products.read().await;
        products
            .get(id)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn save(&self, product: &Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let created = products
            .insert(product.id().to_string(), product.clone())
            .is_none();

        tracing::info!(product_id = %product.id(), created, "Saved product");
        Ok(product.clone())
    }
}
