//! Response normalizer service

use std::sync::Arc;

use chrono::Utc;
use tracing::Instrument;
use rexh_shared::{error_codes, ExceptionOutput};

use crate::domain::value_objects::{DefaultPolicy, RequestContext};
use crate::errors::{
    FieldViolation, RemoteServiceError, RestServiceError, ServiceFailure, ServiceFault,
};
use crate::repositories::TranslationStore;
use crate::services::translation::TranslationResolver;

use super::logger::{FailureEvent, FailureLogger, TracingFailureLogger};

/// HTTP status class of a normalized failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStatus {
    /// Field validation failed (400)
    BadRequest,
    /// A business rule was violated, locally or upstream (417)
    ExpectationFailed,
    /// Anything unrecognized (500)
    InternalServerError,
}

impl FailureStatus {
    pub fn as_u16(&self) -> u16 {
        match self {
            FailureStatus::BadRequest => 400,
            FailureStatus::ExpectationFailed => 417,
            FailureStatus::InternalServerError => 500,
        }
    }
}

/// Payload plus status, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    pub status: FailureStatus,
    pub body: ExceptionOutput,
}

/// Renders every failure category into [`ExceptionOutput`].
///
/// Immutable after construction; one instance is shared by all requests.
#[derive(Clone)]
pub struct ResponseNormalizer {
    resolver: TranslationResolver,
    application: String,
    logger: Arc<dyn FailureLogger>,
}

impl ResponseNormalizer {
    /// `application` names this service on the unknown and validation paths
    pub fn new(
        store: Arc<dyn TranslationStore>,
        policy: DefaultPolicy,
        application: impl Into<String>,
    ) -> Self {
        Self {
            resolver: TranslationResolver::new(store, policy),
            application: application.into(),
            logger: Arc::new(TracingFailureLogger),
        }
    }

    /// Replace the failure log sink
    pub fn with_logger(mut self, logger: Arc<dyn FailureLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    /// Render `fault` for the request described by `ctx`.
    ///
    /// Every event logged while rendering carries the request id and client address.
    pub async fn normalize(&self, fault: &ServiceFault, ctx: &RequestContext) -> NormalizedResponse {
        let span = tracing::error_span!(
            "normalize",
            request_id = %ctx.request_id,
            client_ip = %ctx.client_ip
        );

        self.handle(fault, ctx).instrument(span).await
    }

    async fn handle(&self, fault: &ServiceFault, ctx: &RequestContext) -> NormalizedResponse {
        let response = match fault {
            ServiceFault::Domain(error) => self.domain(error, ctx).await,
            ServiceFault::Upstream(error) => Self::upstream(error),
            ServiceFault::Validation(violations) => self.validation(violations, ctx).await,
            ServiceFault::Unknown(_) => self.unknown(ctx).await,
        };

        let cause = match fault {
            ServiceFault::Unknown(error) => Some(error as &dyn std::fmt::Debug),
            _ => None,
        };

        self.logger.failure_handled(&FailureEvent {
            kind: fault.kind(),
            request_id: &ctx.request_id,
            client_ip: &ctx.client_ip,
            api: &response.body.api,
            module: &response.body.module,
            code: &response.body.code,
            description: &response.body.desc,
            cause,
        });

        response
    }

    async fn domain(&self, error: &RestServiceError, ctx: &RequestContext) -> NormalizedResponse {
        let resolution = self
            .resolver
            .describe(
                error.api(),
                error.module(),
                error.code(),
                error.parameters(),
                &ctx.locale,
            )
            .await;

        NormalizedResponse {
            status: FailureStatus::ExpectationFailed,
            body: ExceptionOutput::new(
                resolution.code,
                resolution.description,
                error.module(),
                error.api(),
            ),
        }
    }

    fn upstream(error: &RemoteServiceError) -> NormalizedResponse {
        NormalizedResponse {
            status: FailureStatus::ExpectationFailed,
            body: ExceptionOutput::new(
                error.code.as_str(),
                error.desc.as_str(),
                error.module.as_str(),
                error.api.as_str(),
            )
            .with_time_stamp(error.time_stamp.unwrap_or_else(Utc::now)),
        }
    }

    async fn unknown(&self, ctx: &RequestContext) -> NormalizedResponse {
        let policy = self.resolver.policy();
        let description = self
            .resolver
            .default_description(&self.application, &ctx.locale)
            .await;

        NormalizedResponse {
            status: FailureStatus::InternalServerError,
            body: ExceptionOutput::new(
                policy.code(),
                description,
                policy.module(),
                self.application.as_str(),
            ),
        }
    }

    async fn validation(
        &self,
        violations: &[FieldViolation],
        ctx: &RequestContext,
    ) -> NormalizedResponse {
        let description = match self
            .resolver
            .resolve(
                &self.application,
                error_codes::SELF_MODULE,
                error_codes::FIELD_VALIDATION,
                &ctx.locale,
            )
            .await
        {
            Some(text) => text,
            None => {
                self.resolver
                    .default_description(&self.application, &ctx.locale)
                    .await
            }
        };

        NormalizedResponse {
            status: FailureStatus::BadRequest,
            body: ExceptionOutput::new(
                error_codes::FIELD_VALIDATION,
                description,
                error_codes::SELF_MODULE,
                self.application.as_str(),
            )
            .with_errors(violations.iter().map(FieldViolation::line)),
        }
    }
}
