use sea_orm::ConnectOptions;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse, ConfigError, FromEnv};

/// Connection URL used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

/// SQL connection pool settings
///
/// Can be constructed manually or loaded from environment variables (with the
/// `config` feature).
#[derive(Clone, Debug)]
pub struct SqlConfig {
    /// Database connection URL (`sqlite://...`, `postgres://...`)
    pub url: String,

    pub max_connections: u32,

    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Log every SQL statement through sqlx
    pub sqlx_logging: bool,
}

impl SqlConfig {
    /// Config with default pool settings for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Whether this config points at SQLite
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

/// Environment variables:
/// - `DATABASE_URL` (default: [`DEFAULT_DATABASE_URL`])
/// - `DB_MAX_CONNECTIONS` (default: 5)
/// - `DB_MIN_CONNECTIONS` (default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
/// - `DB_SQLX_LOGGING` (default: false)
#[cfg(feature = "config")]
impl FromEnv for SqlConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: env_parse("DB_MAX_CONNECTIONS", "5")?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", "1")?,
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", "false")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_config_new_keeps_pool_defaults() {
        let config = SqlConfig::new("postgres://localhost/products");
        assert_eq!(config.url(), "postgres://localhost/products");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert!(!config.is_sqlite());
    }

    #[test]
    fn test_sql_config_default_is_sqlite() {
        let config = SqlConfig::default();
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert!(config.is_sqlite());
    }

    #[test]
    fn test_sql_config_into_connect_options() {
        let options = SqlConfig::new("sqlite::memory:").into_connect_options();
        assert_eq!(options.get_url(), "sqlite::memory:");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sql_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("DB_MAX_CONNECTIONS", None),
                ("DB_SQLX_LOGGING", None),
            ],
            || {
                let config = SqlConfig::from_env().unwrap();
                assert_eq!(config.url, DEFAULT_DATABASE_URL);
                assert_eq!(config.max_connections, 5);
                assert!(!config.sqlx_logging);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sql_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite::memory:")),
                ("DB_MAX_CONNECTIONS", Some("1")),
                ("DB_CONNECT_TIMEOUT_SECS", Some("2")),
            ],
            || {
                let config = SqlConfig::from_env().unwrap();
                assert_eq!(config.url, "sqlite::memory:");
                assert_eq!(config.max_connections, 1);
                assert_eq!(config.connect_timeout_secs, 2);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sql_config_from_env_invalid_number() {
        temp_env::with_var("DB_MAX_CONNECTIONS", Some("lots"), || {
            let err = SqlConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
        });
    }
}
