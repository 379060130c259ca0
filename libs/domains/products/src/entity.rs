use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::error::ProductError;
use crate::models::{Product, ProductStatus};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Rows written by other tools may carry an unknown status literal
impl TryFrom<Model> for Product {
    type Error = ProductError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = ProductStatus::parse(&model.status)?;
        Ok(Product::from_parts(model.id, model.name, model.price, status))
    }
}

impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            id: Set(product.id().to_string()),
            name: Set(product.name().to_string()),
            price: Set(product.price()),
            status: Set(product.status().to_string()),
        }
    }
}
