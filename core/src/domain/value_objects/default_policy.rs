//! Process-wide fallback failure identity

use rexh_shared::ExceptionHandlerConfig;

use crate::errors::DomainError;

/// Fallback identity used whenever no specific translation applies.
///
/// Built once at startup and read-only afterwards. Empty fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPolicy {
    code: String,
    module: String,
    message: String,
}

impl DefaultPolicy {
    pub fn new(
        code: impl Into<String>,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let policy = Self {
            code: code.into().trim().to_string(),
            module: module.into().trim().to_string(),
            message: message.into(),
        };

        for (name, value) in [
            ("default error code", &policy.code),
            ("default error module", &policy.module),
            ("default error message", &policy.message),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::Configuration {
                    message: format!("{} isn't defined", name),
                });
            }
        }

        Ok(policy)
    }

    pub fn from_config(config: &ExceptionHandlerConfig) -> Result<Self, DomainError> {
        Self::new(
            config.default_error_code.as_str(),
            config.default_error_module.as_str(),
            config.default_error_message.as_str(),
        )
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether `code` already is the default code (case-insensitive)
    pub fn is_default_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}
