//! Services containing the error normalization pipeline.

pub mod formatter;
pub mod normalizer;
pub mod translation;

// Re-export commonly used types
pub use formatter::format_message;
pub use normalizer::{
    FailureEvent, FailureLogger, FailureStatus, NormalizedResponse, ResponseNormalizer,
    TracingFailureLogger,
};
pub use translation::{Resolution, TranslationResolver};
