//! Configuration for the products CLI

use core_config::FromEnv;
use database::sql::SqlConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub database: SqlConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            environment: Environment::from_env(),
            database: SqlConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [("APP_ENV", None::<&str>), ("DATABASE_URL", None), ("DB_MAX_CONNECTIONS", None)],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_development());
                assert!(config.database.is_sqlite());
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_pool_size() {
        temp_env::with_var("DB_MAX_CONNECTIONS", Some("-1"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
        });
    }
}
