use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("The price must be greater than or equal to zero")]
    NegativePrice,

    #[error("Invalid product id '{0}': must be a UUID")]
    InvalidId(String),

    #[error("The product name is required")]
    EmptyName,

    #[error("Invalid product status '{0}': must be 'enabled' or 'disabled'")]
    InvalidStatus(String),

    #[error("The price must be greater than zero to enable the product")]
    EnableRequiresPositivePrice,

    #[error("The price must be zero to disable the product")]
    DisableRequiresZeroPrice,

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}
