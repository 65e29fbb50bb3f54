//! Handler error type

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use rexh_core::errors::{FailureKind, RemoteServiceError, RestServiceError, ServiceFault};

/// Error returned by handlers; rendered by [`ExceptionHandler`](crate::ExceptionHandler).
///
/// Any failure convertible into [`ServiceFault`] converts into this with `?`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiFault(pub ServiceFault);

impl ApiFault {
    pub fn fault(&self) -> &ServiceFault {
        &self.0
    }

    pub fn into_inner(self) -> ServiceFault {
        self.0
    }
}

impl From<ServiceFault> for ApiFault {
    fn from(fault: ServiceFault) -> Self {
        ApiFault(fault)
    }
}

impl From<RestServiceError> for ApiFault {
    fn from(error: RestServiceError) -> Self {
        ApiFault(ServiceFault::Domain(error))
    }
}

impl From<RemoteServiceError> for ApiFault {
    fn from(error: RemoteServiceError) -> Self {
        ApiFault(ServiceFault::Upstream(error))
    }
}

impl From<validator::ValidationErrors> for ApiFault {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiFault(ServiceFault::from(errors))
    }
}

impl From<anyhow::Error> for ApiFault {
    fn from(error: anyhow::Error) -> Self {
        ApiFault(ServiceFault::Unknown(error))
    }
}

impl ResponseError for ApiFault {
    fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            FailureKind::Domain | FailureKind::Upstream => StatusCode::EXPECTATION_FAILED,
            FailureKind::Validation => StatusCode::BAD_REQUEST,
            FailureKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Bare status; the payload is written by the exception handler middleware
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}
