//! Command-line presentation of the product use cases
//!
//! Translates an action plus its parameters into service calls and renders
//! the result as text. Errors are returned untouched for the caller to report.

use std::fmt;

use crate::error::ProductResult;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Action selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    Create,
    Enable,
    Disable,
    /// Describe a product; also used for any unrecognized action
    #[default]
    Get,
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "create" => Action::Create,
            "enable" => Action::Enable,
            "disable" => Action::Disable,
            _ => Action::Get,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::Get => "get",
        };
        f.write_str(name)
    }
}

/// Run one action against the service and describe the outcome
///
/// `name` and `price` are only read by [`Action::Create`]; `id` by every
/// other action.
pub async fn run<R: ProductRepository>(
    service: &ProductService<R>,
    action: Action,
    id: &str,
    name: &str,
    price: f64,
) -> ProductResult<String> {
    tracing::debug!(%action, id, "Running product action");

    let output = match action {
        Action::Create => {
            let product = service.create(name, price).await?;
            format!(
                "Product ID {} with the name {} has been created with the price {} and status {}",
                product.id(),
                product.name(),
                product.price(),
                product.status()
            )
        }
        Action::Enable => {
            let product = service.get(id).await?;
            let product = service.enable(product).await?;
            format!("Product {} has been enabled", product.name())
        }
        Action::Disable => {
            let product = service.get(id).await?;
            let product = service.disable(product).await?;
            format!("Product {} has been disabled", product.name())
        }
        Action::Get => {
            let product = service.get(id).await?;
            format!(
                "Product ID: {}\nName: {}\nPrice: {}\nStatus: {}",
                product.id(),
                product.name(),
                product.price(),
                product.status()
            )
        }
    };

    Ok(output)
}
