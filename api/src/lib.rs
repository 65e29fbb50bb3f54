//! HTTP wiring for the error normalization pipeline
//!
//! Wrap an actix-web `App` in [`ExceptionHandler`] and every failure a handler
//! returns is rendered into the uniform, localized payload.

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use errors::ApiFault;
pub use extractors::ValidatedJson;
pub use middleware::{ExceptionHandler, RequestContextExt, REQUEST_ID_HEADER};
