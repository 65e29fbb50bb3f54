//! Failure logging sink

use std::fmt::Debug;

use crate::errors::FailureKind;

/// One handled failure, as reported to the log sink
#[derive(Debug, Clone, Copy)]
pub struct FailureEvent<'a> {
    pub kind: FailureKind,
    pub request_id: &'a str,
    pub client_ip: &'a str,
    pub api: &'a str,
    pub module: &'a str,
    pub code: &'a str,
    pub description: &'a str,
    /// Underlying fault of unknown failures; never part of the response
    pub cause: Option<&'a dyn Debug>,
}

/// Receives every failure the normalizer handles
pub trait FailureLogger: Send + Sync {
    fn failure_handled(&self, event: &FailureEvent<'_>);
}

/// Default sink writing one `tracing` error event per failure
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureLogger;

impl FailureLogger for TracingFailureLogger {
    fn failure_handled(&self, event: &FailureEvent<'_>) {
        match event.cause {
            Some(cause) => tracing::error!(
                kind = %event.kind,
                request_id = %event.request_id,
                client_ip = %event.client_ip,
                api = %event.api,
                module = %event.module,
                code = %event.code,
                cause = ?cause,
                "{}",
                event.description
            ),
            None => tracing::error!(
                kind = %event.kind,
                request_id = %event.request_id,
                client_ip = %event.client_ip,
                api = %event.api,
                module = %event.module,
                code = %event.code,
                "{}",
                event.description
            ),
        }
    }
}
