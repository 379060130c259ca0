use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// Product status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductStatus {
    /// Product is available for sale; requires a positive price
    Enabled,
    /// Product is not for sale; requires a zero price
    #[default]
    Disabled,
}

impl ProductStatus {
    /// Parse a stored status literal (`enabled` / `disabled`)
    pub fn parse(value: &str) -> ProductResult<Self> {
        ProductStatus::from_str(value).map_err(|_| ProductError::InvalidStatus(value.to_string()))
    }
}

/// Product entity
///
/// Name and price are stored as given; call [`Product::is_valid`] to check
/// them. Status changes go through [`Product::enable`] and
/// [`Product::disable`], which check the price at the moment of transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    status: ProductStatus,
}

impl Product {
    /// Create a disabled product with a freshly generated id
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: name.into(),
            price,
            status: ProductStatus::Disabled,
        }
    }

    /// Rebuild a product from a stored record, without validation
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        status: ProductStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            status,
        }
    }

    /// Check the product's fields, returning the first failing rule
    ///
    /// Rules, in order: price is a finite number not below zero, id is a
    /// hyphenated UUID (any version), name is not empty.
    pub fn is_valid(&self) -> ProductResult<()> {
        if !is_valid_price(self.price) {
            return Err(ProductError::NegativePrice);
        }
        if !is_hyphenated_uuid(&self.id) {
            return Err(ProductError::InvalidId(self.id.clone()));
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        Ok(())
    }

    /// Mark the product as enabled; fails unless the price is above zero
    pub fn enable(&mut self) -> ProductResult<()> {
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(ProductError::EnableRequiresPositivePrice);
        }
        self.status = ProductStatus::Enabled;
        Ok(())
    }

    /// Mark the product as disabled; fails while the price is above zero
    pub fn disable(&mut self) -> ProductResult<()> {
        if self.price.is_nan() || self.price > 0.0 {
            return Err(ProductError::DisableRequiresZeroPrice);
        }
        self.status = ProductStatus::Disabled;
        Ok(())
    }

    /// Set a new price. The status is left as is even if it no longer
    /// matches the price.
    pub fn change_price(&mut self, price: f64) -> ProductResult<()> {
        if !is_valid_price(price) {
            return Err(ProductError::NegativePrice);
        }
        self.price = price;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// NaN and the infinities are not prices
fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// Only the canonical 8-4-4-4-12 form; simple, URN and braced forms are refused
fn is_hyphenated_uuid(id: &str) -> bool {
    Uuid::try_parse(id)
        .map(|uuid| uuid.hyphenated().to_string() == id.to_ascii_lowercase())
        .unwrap_or(false)
}
