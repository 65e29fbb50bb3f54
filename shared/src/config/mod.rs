//! Configuration module
//!
//! - `database` - Catalog datasource and host-provisioned connection pools
//! - `environment` - Environment detection and logging configuration
//! - `exception_handler` - Default failure identity and translation source
//! - `server` - HTTP server settings and the service name

pub mod database;
pub mod environment;
pub mod exception_handler;
pub mod server;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub use database::{DatabaseConfig, DatasourceConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use exception_handler::ExceptionHandlerConfig;
pub use server::ServerConfig;

/// Prefix of environment variables overriding file configuration
pub const ENV_PREFIX: &str = "REXH";

/// Misconfiguration detected while loading settings; always fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration '{field}' isn't defined")]
    Missing { field: &'static str },

    #[error("Invalid configuration '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Error normalization pipeline configuration
    #[serde(default, alias = "exceptionHandler")]
    pub exception_handler: ExceptionHandlerConfig,

    /// Connection pools provisioned by the host application, by name
    #[serde(default)]
    pub datasources: HashMap<String, DatabaseConfig>,

    /// Logging configuration; derived from the environment when absent
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.{toml,json,yaml}` (optional)
    /// 2. `config/<environment>.{toml,json,yaml}` (optional)
    /// 3. `REXH__SECTION__KEY` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();

        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name(environment.config_file()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.environment = environment;
        config.validate()?;

        Ok(config)
    }

    /// Check every required setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.application_name.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "server.application_name",
            });
        }

        self.exception_handler.validate()
    }

    /// Effective logging configuration
    pub fn logging(&self) -> LoggingConfig {
        self.logging
            .clone()
            .unwrap_or_else(|| LoggingConfig::for_environment(self.environment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_incomplete() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { field: "exception_handler.default_error_code" })
        ));
    }

    #[test]
    fn test_logging_follows_environment() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert_eq!(config.logging().level, "warn");
    }

    #[test]
    fn test_deserialize_from_toml_source() {
        let source = r#"
            [server]
            application_name = "ORD"

            [exception_handler]
            default_error_code = "DEFAULT_CODE"
            default_error_module = "DEFAULT_MODULE"
            default_error_message = "Unexpected error"

            [exception_handler.datasource]
            name = "primary"
            schema_name = "CATALOG"

            [datasources.primary]
            url = "mysql://localhost:3306/orders"
        "#;

        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(source, ::config::FileFormat::Toml))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.server.application_name, "ORD");
        assert!(config.datasources.contains_key("primary"));
        let datasource = config.exception_handler.datasource.unwrap();
        assert!(!datasource.creates_own_pool());
        assert_eq!(datasource.normalized_schema(), "catalog");
    }
}
