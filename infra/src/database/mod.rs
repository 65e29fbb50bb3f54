//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and the named-datasource registry
//! - The `api_translations` repository

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, DatasourceRegistry};
pub use mysql::MySqlTranslationRepository;
