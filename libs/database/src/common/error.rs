/// Error type for connection and schema management
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by SeaORM / the SQL driver
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
