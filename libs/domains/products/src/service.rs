//! Product Service - use cases over the Product entity

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product service orchestrating domain checks and persistence
///
/// Every mutating use case performs its domain check first and writes to the
/// repository exactly once, only if the check passed.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ProductResult<Product> {
        self.repository.get(id).await
    }

    /// Create and persist a new (disabled) product
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, price: f64) -> ProductResult<Product> {
        let product = Product::new(name, price);
        product.is_valid()?;

        self.repository.save(&product).await
    }

    /// Enable a product and persist it
    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    pub async fn enable(&self, mut product: Product) -> ProductResult<Product> {
        product.enable()?;
        self.repository.save(&product).await
    }

    /// Disable a product and persist it
    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    pub async fn disable(&self, mut product: Product) -> ProductResult<Product> {
        product.disable()?;
        self.repository.save(&product).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
