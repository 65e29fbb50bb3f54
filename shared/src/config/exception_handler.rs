//! Exception handler configuration module

use serde::{Deserialize, Serialize};

use super::{ConfigError, DatasourceConfig};

/// Settings of the error normalization pipeline.
///
/// The three default fields form the process-wide fallback identity and are
/// required; the service must not start without them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExceptionHandlerConfig {
    /// Code reported when no specific code applies
    #[serde(default, alias = "defaultErrorCode")]
    pub default_error_code: String,

    /// Module holding the generic translation
    #[serde(default, alias = "defaultErrorModule")]
    pub default_error_module: String,

    /// Last-resort description when the catalog has no usable text
    #[serde(default, alias = "defaultErrorMessage")]
    pub default_error_message: String,

    /// Language used when a request declares none
    #[serde(default = "default_fallback_locale", alias = "fallbackLocale")]
    pub fallback_locale: String,

    /// TOML translation catalog, used when no datasource is configured
    #[serde(default, alias = "catalogPath")]
    pub catalog_path: Option<String>,

    /// Datasource holding the translation catalog
    #[serde(default)]
    pub datasource: Option<DatasourceConfig>,
}

impl Default for ExceptionHandlerConfig {
    fn default() -> Self {
        Self {
            default_error_code: String::new(),
            default_error_module: String::new(),
            default_error_message: String::new(),
            fallback_locale: default_fallback_locale(),
            catalog_path: None,
            datasource: None,
        }
    }
}

impl ExceptionHandlerConfig {
    /// Check required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("exception_handler.default_error_code", &self.default_error_code),
            ("exception_handler.default_error_module", &self.default_error_module),
            ("exception_handler.default_error_message", &self.default_error_message),
            ("exception_handler.fallback_locale", &self.fallback_locale),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing { field });
            }
        }

        match (&self.datasource, &self.catalog_path) {
            (Some(datasource), _) => datasource.validate(),
            (None, Some(path)) if !path.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::Missing {
                field: "exception_handler.datasource",
            }),
        }
    }
}

fn default_fallback_locale() -> String {
    String::from("tr")
}
