//! Response normalization
//!
//! Turns any [`ServiceFault`](crate::errors::ServiceFault) into the uniform
//! payload and reports each handled failure to a [`FailureLogger`].

mod logger;
mod service;

pub use logger::{FailureEvent, FailureLogger, TracingFailureLogger};
pub use service::{FailureStatus, NormalizedResponse, ResponseNormalizer};

#[cfg(test)]
mod tests;
