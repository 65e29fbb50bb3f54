//! Database configuration module

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ConfigError;

static SQL_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// Whether `name` can be interpolated into SQL as a schema or table name
pub fn is_sql_identifier(name: &str) -> bool {
    SQL_IDENTIFIER.is_match(name)
}

/// Connection pool settings for a database the host application provisions itself
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/rexh"),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            idle_timeout: default_idle_timeout(),
            max_lifetime: default_max_lifetime(),
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Datasource holding the `api_translations` catalog.
///
/// With a non-empty `url` a dedicated pool is created for the catalog. With an
/// empty `url` the pool registered under `name` by the host application is reused.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasourceConfig {
    /// Name of the pool, either the one to reuse or the suffix of the one to create
    pub name: String,

    /// Schema holding the `api_translations` table
    #[serde(alias = "schemaName")]
    pub schema_name: String,

    /// Connection URL; empty to reuse the named pool
    #[serde(default)]
    pub url: String,

    /// Driver name, informational (only MySQL is supported)
    #[serde(default)]
    pub driver: String,

    /// Username overriding the one in `url`
    #[serde(default)]
    pub username: String,

    /// Password overriding the one in `url`
    #[serde(default)]
    pub password: String,

    /// Maximum number of connections for a dedicated pool
    #[serde(default = "default_max_connections", alias = "maxConnections")]
    pub max_connections: u32,

    /// Connection timeout in seconds for a dedicated pool
    #[serde(default = "default_connect_timeout", alias = "connectTimeout")]
    pub connect_timeout: u64,
}

impl DatasourceConfig {
    /// Whether a dedicated pool must be created for the catalog
    pub fn creates_own_pool(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Schema name as it is interpolated into catalog queries
    pub fn normalized_schema(&self) -> String {
        self.schema_name.trim().to_lowercase()
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "exception_handler.datasource.name",
            });
        }

        let schema = self.schema_name.trim();
        if schema.is_empty() {
            return Err(ConfigError::Missing {
                field: "exception_handler.datasource.schema_name",
            });
        }
        if !is_sql_identifier(schema) {
            return Err(ConfigError::Invalid {
                field: "exception_handler.datasource.schema_name",
                reason: format!("'{}' is not a plain SQL identifier", schema),
            });
        }

        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}
