//! Failure types: the contract domain failures implement, the tagged union
//! the normalizer dispatches on, and the crate's own error type.

mod contract;
mod types;

pub use contract::ServiceFailure;
pub use types::{FailureKind, FieldViolation, RemoteServiceError, RestServiceError, ServiceFault};

use thiserror::Error;

/// Errors raised by the core itself (never rendered to API consumers)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Translation store error: {message}")]
    Store { message: String },
}

#[cfg(test)]
mod tests;
