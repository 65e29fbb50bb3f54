//! # Infrastructure Layer
//!
//! Concrete collaborators of the normalization pipeline:
//!
//! - **Database**: connection pools, the named-datasource registry and the
//!   MySQL translation repository
//! - **Catalog**: a translation store read from a TOML file
//! - **Upstream**: decoding normalized failures returned by other services
//! - **Bootstrap**: choosing the translation store at startup

pub mod bootstrap;
pub mod catalog;
pub mod database;
pub mod upstream;

pub use bootstrap::build_translation_store;
pub use catalog::CatalogTranslationStore;
pub use database::{DatabasePool, DatasourceRegistry, MySqlTranslationRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Named datasource was never provisioned
    #[error("Datasource '{0}' is not registered")]
    DatasourceNotFound(String),

    /// Translation catalog file could not be read or parsed
    #[error("Catalog error in '{path}': {message}")]
    Catalog { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
