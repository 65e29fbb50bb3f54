//! # REXH Core
//!
//! Turns any failure raised while serving a request into one localized,
//! machine-parseable response. This crate holds the failure contract, the
//! translation store interface, the message formatter, the translation
//! resolver with its fallback chain, and the response normalizer. It has no
//! HTTP framework dependency.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DefaultPolicy, RequestContext, TranslationKey};
pub use errors::{
    DomainError, FailureKind, FieldViolation, RemoteServiceError,
    RestServiceError, ServiceFailure, ServiceFault,
};
pub use repositories::{MockTranslationStore, TranslationStore};
pub use services::{
    format_message, FailureEvent, FailureLogger, FailureStatus, NormalizedResponse,
    ResponseNormalizer, TracingFailureLogger,
};
