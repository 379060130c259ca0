use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{retry, retry_with_backoff, DatabaseResult, RetryConfig};

/// Open a connection pool for the given config
///
/// ```ignore
/// use database::sql::{connect, SqlConfig};
///
/// let db = connect(SqlConfig::new("sqlite::memory:")).await?;
/// ```
pub async fn connect(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    let backend = if config.is_sqlite() { "sqlite" } else { "sql" };
    let db = Database::connect(config.into_connect_options()).await?;
    info!(backend, "Connected to database");
    Ok(db)
}

/// Open a connection pool, retrying with exponential backoff on failure
///
/// `None` uses the default policy (3 retries starting at 100ms).
pub async fn connect_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let attempt = || connect(config.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}

/// Apply every pending migration of `M`
///
/// Applied migrations are recorded by SeaORM, so calling this on every start
/// only runs what is new.
///
/// ```ignore
/// use database::sql::run_migrations;
/// use migration::Migrator;
///
/// run_migrations::<Migrator>(&db, "products").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
