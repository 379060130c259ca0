use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use tracing::{error, info};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// SQL-backed ProductRepository (SQLite or PostgreSQL through SeaORM)
#[derive(Clone)]
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn exists(&self, id: &str) -> ProductResult<bool> {
        let found = entity::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn get(&self, id: &str) -> ProductResult<Product> {
        let model = entity::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        Product::try_from(model)
    }

    async fn save(&self, product: &Product) -> ProductResult<Product> {
        let exists = self.exists(product.id()).await?;
        let active_model: entity::ActiveModel = product.into();

        let result = if exists {
            active_model.update(&self.db).await
        } else {
            active_model.insert(&self.db).await
        };

        let model = result.map_err(|e| {
            error!(product_id = %product.id(), error = %e, "Failed to save product");
            ProductError::from(e)
        })?;

        info!(product_id = %model.id, created = !exists, "Saved product");
        Product::try_from(model)
    }
}
