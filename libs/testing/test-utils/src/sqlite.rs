//! SQLite test infrastructure
//!
//! Each `TestDatabase` is a private in-memory SQLite database, so tests can run
//! in parallel without containers or cleanup.

use database::sql::{self, SqlConfig};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

/// In-memory SQLite database, migrated with the production `Migrator`
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a fresh database with every migration applied
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let db = Self::empty().await;

        Migrator::up(&db.connection, None)
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test database ready (SQLite)");

        db
    }

    /// Create a fresh database with no schema at all
    pub async fn empty() -> Self {
        // A single pooled connection keeps the in-memory database alive
        let config = SqlConfig {
            max_connections: 1,
            min_connections: 1,
            ..SqlConfig::new("sqlite::memory:")
        };

        let connection = sql::connect(config)
            .await
            .expect("Failed to open in-memory SQLite database");

        Self { connection }
    }

    /// Get a handle to the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
