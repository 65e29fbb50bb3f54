//! Type definitions module
//!
//! - `language` - Locale handling for translation lookups
//! - `response` - The normalized error payload returned to API consumers

pub mod language;
pub mod response;

pub use language::Locale;
pub use response::ExceptionOutput;
