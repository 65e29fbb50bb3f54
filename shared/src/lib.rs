//! Shared utilities and common types for the REXH server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - The normalized error payload returned to API consumers
//! - Locale handling for translation lookups
//! - Reserved error codes and markers

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, DatasourceConfig, Environment,
    ExceptionHandlerConfig, LoggingConfig, ServerConfig,
};
pub use errors::error_codes;
pub use types::{ExceptionOutput, Locale};
