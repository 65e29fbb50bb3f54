//! The normalized error payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single response shape every handled failure is rendered into.
///
/// `errors` only carries field validation lines; it is empty for every
/// other failure category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionOutput {
    /// Failure code, possibly carrying the `ND_` marker
    pub code: String,

    /// Localized, human-readable description
    pub desc: String,

    /// Module inside the service that defines the failure
    pub module: String,

    /// Service that defines the failure
    pub api: String,

    /// When the failure was rendered, or when the origin service rendered it
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime<Utc>,

    /// Field validation detail lines
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ExceptionOutput {
    /// Create a payload stamped with the current time
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
            time_stamp: Utc::now(),
            errors: Vec::new(),
        }
    }

    /// Override the timestamp
    pub fn with_time_stamp(mut self, time_stamp: DateTime<Utc>) -> Self {
        self.time_stamp = time_stamp;
        self
    }

    /// Append field validation lines
    pub fn with_errors(mut self, errors: impl IntoIterator<Item = String>) -> Self {
        self.errors.extend(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let output = ExceptionOutput::new("404", "Item not found", "ORDER", "ORD");
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["code"], "404");
        assert_eq!(json["desc"], "Item not found");
        assert_eq!(json["module"], "ORDER");
        assert_eq!(json["api"], "ORD");
        assert!(json["timeStamp"].is_string());
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[test]
    fn test_errors_default_when_absent() {
        let body = r#"{
            "code": "12",
            "desc": "Remote failure",
            "module": "PAYMENT",
            "api": "PAY",
            "timeStamp": "2024-03-01T10:15:30Z"
        }"#;
        let output: ExceptionOutput = serde_json::from_str(body).unwrap();
        assert!(output.errors.is_empty());
        assert_eq!(output.time_stamp.to_rfc3339(), "2024-03-01T10:15:30+00:00");
    }
}
