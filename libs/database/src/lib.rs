//! Database library providing SQL connection management and migrations
//!
//! Connections go through SeaORM, so any URL it understands works. The
//! products CLI defaults to SQLite; the same schema runs on PostgreSQL.
//!
//! # Features
//!
//! - `config` - Load [`sql::SqlConfig`] from the environment with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use my_app::migrator::Migrator;
//!
//! let db = sql::connect_with_retry(SqlConfig::new("sqlite::memory:"), None).await?;
//! sql::run_migrations::<Migrator>(&db, "my_app").await?;
//! ```

pub mod common;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
