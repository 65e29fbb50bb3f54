//! Database connection pool management
//!
//! Pools are either created for the translation catalog from its datasource
//! settings, or provisioned by the host application and looked up by name in
//! the [`DatasourceRegistry`].

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use rexh_shared::{error_codes, DatabaseConfig, DatasourceConfig};

use crate::InfrastructureError;

/// Named MySQL connection pool
#[derive(Clone, Debug)]
pub struct DatabasePool {
    name: String,
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect a pool for a database the host application provisions
    pub async fn new(name: impl Into<String>, config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let name = name.into();
        tracing::info!(
            pool = %name,
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let options = parse_url(&config.url)?;
        let pool = Self::pool_options(config.max_connections, config.connect_timeout)
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(pool = %name, error = %e, "Failed to create database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!(pool = %name, "Database connection pool created");
        Ok(Self { name, pool })
    }

    /// Pool whose connections are opened on first use
    pub fn connect_lazy(name: impl Into<String>, config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = parse_url(&config.url)?;
        let pool = Self::pool_options(config.max_connections, config.connect_timeout)
            .min_connections(0)
            .connect_lazy_with(options);

        Ok(Self {
            name: name.into(),
            pool,
        })
    }

    /// Dedicated catalog pool, named `GEH_<name>`
    pub async fn for_datasource(datasource: &DatasourceConfig) -> Result<Self, InfrastructureError> {
        let name = format!("{}{}", error_codes::POOL_NAME_PREFIX, datasource.name.trim());
        tracing::info!(
            pool = %name,
            driver = %datasource.driver,
            "Creating translation catalog connection pool"
        );

        let mut options = parse_url(&datasource.url)?;
        if !datasource.username.is_empty() {
            options = options.username(&datasource.username);
        }
        if !datasource.password.is_empty() {
            options = options.password(&datasource.password);
        }

        let pool = Self::pool_options(datasource.max_connections, datasource.connect_timeout)
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(pool = %name, error = %e, "Failed to create catalog pool");
                InfrastructureError::Database(e)
            })?;

        Ok(Self { name, pool })
    }

    fn pool_options(max_connections: u32, connect_timeout: u64) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(connect_timeout))
            .test_before_acquire(true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(pool = %self.name, error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })?;
        Ok(())
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        tracing::info!(pool = %self.name, "Closing database connection pool");
        self.pool.close().await;
    }
}

fn parse_url(url: &str) -> Result<MySqlConnectOptions, InfrastructureError> {
    MySqlConnectOptions::from_str(url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))
}

/// Pools provisioned by the host application, by name
#[derive(Clone, Debug, Default)]
pub struct DatasourceRegistry {
    pools: HashMap<String, DatabasePool>,
}

impl DatasourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect every configured datasource
    pub async fn from_config(
        datasources: &HashMap<String, DatabaseConfig>,
    ) -> Result<Self, InfrastructureError> {
        let mut registry = Self::new();
        for (name, config) in datasources {
            registry.register(DatabasePool::new(name.as_str(), config).await?);
        }
        Ok(registry)
    }

    /// Add a pool under its own name, replacing any previous one
    pub fn register(&mut self, pool: DatabasePool) {
        self.pools.insert(pool.name().to_string(), pool);
    }

    pub fn get(&self, name: &str) -> Option<&DatabasePool> {
        self.pools.get(name)
    }

    /// Look a pool up; a missing pool is a startup error
    pub fn require(&self, name: &str) -> Result<&DatabasePool, InfrastructureError> {
        self.get(name).ok_or_else(|| {
            tracing::error!(datasource = %name, "Named datasource is not registered");
            InfrastructureError::DatasourceNotFound(name.to_string())
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Close every registered pool
    pub async fn close_all(&self) {
        for pool in self.pools.values() {
            pool.close().await;
        }
    }
}
