//! Products Domain
//!
//! Manages a single Product entity (create, get, enable, disable) with the
//! domain rules kept apart from storage and presentation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← Command-line actions, text output
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Use cases: domain check, then one write
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Persistence port (trait + in-memory / SQL adapters)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product entity and its status rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, Action, InMemoryProductRepository, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ProductService::new(InMemoryProductRepository::new());
//!
//! let created = service.create("Product 1", 19.99).await?;
//! let output = handlers::run(&service, Action::Get, created.id(), "", 0.0).await?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::Action;
pub use models::{Product, ProductStatus};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use sql::SqlProductRepository;
