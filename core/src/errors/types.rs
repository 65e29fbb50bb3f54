//! Failure variants handled by the response normalizer

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

use super::contract::ServiceFailure;

/// A raised domain failure.
///
/// Each raise owns its parameter list; two raises of the same failure kind
/// never share parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{desc}")]
pub struct RestServiceError {
    code: String,
    desc: String,
    module: String,
    api: String,
    parameters: Vec<String>,
}

impl RestServiceError {
    /// Create a failure without parameters
    pub fn new(
        code: impl Into<String>,
        desc: impl Into<String>,
        module: impl Into<String>,
        api: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            desc: desc.into(),
            module: module.into(),
            api: api.into(),
            parameters: Vec::new(),
        }
    }

    /// Replace the parameters
    pub fn with_parameters<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = params.into_iter().map(Into::into).collect();
        self
    }
}

impl ServiceFailure for RestServiceError {
    fn code(&self) -> &str {
        &self.code
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn module(&self) -> &str {
        &self.module
    }

    fn api(&self) -> &str {
        &self.api
    }

    fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

/// A failure another service already rendered into the normalized payload.
///
/// It carries the final description and is passed through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{desc}")]
pub struct RemoteServiceError {
    pub code: String,
    pub desc: String,
    pub module: String,
    pub api: String,
    #[serde(rename = "timeStamp", default, deserialize_with = "deserialize_time_stamp")]
    pub time_stamp: Option<DateTime<Utc>>,
}

impl RemoteServiceError {
    /// Create a pass-through failure
    pub fn new(
        code: impl Into<String>,
        desc: impl Into<String>,
        api: impl Into<String>,
        module: impl Into<String>,
        time_stamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code: code.into(),
            desc: desc.into(),
            module: module.into(),
            api: api.into(),
            time_stamp,
        }
    }
}

/// Parse an ISO-8601 timestamp; values without an offset are taken as UTC
fn parse_time_stamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(stamped) = DateTime::parse_from_rfc3339(value) {
        return Some(stamped.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|local| Utc.from_utc_datetime(&local))
}

fn deserialize_time_stamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_time_stamp(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timeStamp '{}'", raw))),
    }
}

/// One invalid field of a request payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Detail line reported in the `errors` array
    pub fn line(&self) -> String {
        format!("'{}' field is wrong. {}", self.field, self.message)
    }
}

/// Failure category, used for dispatch and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Domain,
    Upstream,
    Validation,
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Domain => write!(f, "RestServiceError"),
            FailureKind::Upstream => write!(f, "RemoteServiceError"),
            FailureKind::Validation => write!(f, "FieldValidation"),
            FailureKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Everything that can reach the normalization boundary
#[derive(Error, Debug)]
pub enum ServiceFault {
    #[error(transparent)]
    Domain(#[from] RestServiceError),

    #[error(transparent)]
    Upstream(#[from] RemoteServiceError),

    #[error("Field validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Unexpected failure: {0}")]
    Unknown(anyhow::Error),
}

impl ServiceFault {
    /// Wrap any other error as an unknown failure
    pub fn unknown<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        ServiceFault::Unknown(error.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ServiceFault::Domain(_) => FailureKind::Domain,
            ServiceFault::Upstream(_) => FailureKind::Upstream,
            ServiceFault::Validation(_) => FailureKind::Validation,
            ServiceFault::Unknown(_) => FailureKind::Unknown,
        }
    }
}

impl From<anyhow::Error> for ServiceFault {
    fn from(error: anyhow::Error) -> Self {
        ServiceFault::Unknown(error)
    }
}

impl From<validator::ValidationErrors> for ServiceFault {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let violations = fields
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Failed '{}' constraint.", error.code));
                    FieldViolation::new(field, message)
                })
            })
            .collect();

        ServiceFault::Validation(violations)
    }
}
