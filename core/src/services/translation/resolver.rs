//! Translation resolver
//!
//! Looks texts up in the translation store and applies the fallback chain:
//!
//! 1. the failure's own `(api, module, code, locale)`
//! 2. the default identity `(api, default module, default code, locale)`;
//!    the emitted code gets the `ND_` marker unless it already is the default code
//! 3. the static default message, without marker
//!
//! Store errors count as misses; they are logged and never propagated.

use std::sync::Arc;

use rexh_shared::{error_codes, Locale};

use crate::domain::entities::TranslationKey;
use crate::domain::value_objects::DefaultPolicy;
use crate::repositories::TranslationStore;
use crate::services::formatter::format_message;

/// Code and description chosen for a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub code: String,
    pub description: String,
}

/// Resolves localized descriptions from the translation store
#[derive(Clone)]
pub struct TranslationResolver {
    store: Arc<dyn TranslationStore>,
    policy: DefaultPolicy,
}

impl TranslationResolver {
    pub fn new(store: Arc<dyn TranslationStore>, policy: DefaultPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &DefaultPolicy {
        &self.policy
    }

    /// Exact-key lookup without any fallback
    pub async fn resolve(
        &self,
        application: &str,
        module: &str,
        code: &str,
        locale: &Locale,
    ) -> Option<String> {
        let key = TranslationKey::new(application, module, code, locale);

        match self.store.find_description(&key).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    error = %e,
                    "Translation store query failed, treating as missing translation"
                );
                None
            }
        }
    }

    /// Resolve the code and description of a specific failure.
    ///
    /// `parameters` are substituted into the failure's own template. A default
    /// template receives the application name as `{0}`.
    pub async fn describe(
        &self,
        api: &str,
        module: &str,
        code: &str,
        parameters: &[String],
        locale: &Locale,
    ) -> Resolution {
        let code = if code.trim().is_empty() {
            self.policy.code()
        } else {
            code
        };

        if let Some(template) = self.resolve(api, module, code, locale).await {
            return Resolution {
                code: code.to_string(),
                description: format_message(&template, parameters),
            };
        }

        tracing::error!(
            module = %module,
            code = %code,
            "Could not find exception definition"
        );

        match self.catalog_default(api, locale).await {
            Some(description) => {
                let code = if self.policy.is_default_code(code) {
                    code.to_string()
                } else {
                    format!("{}{}", error_codes::NOT_DEFINED_PREFIX, code)
                };
                Resolution { code, description }
            }
            None => Resolution {
                code: code.to_string(),
                description: self.policy.message().to_string(),
            },
        }
    }

    /// Description of the default identity: catalog text, else the static message
    pub async fn default_description(&self, application: &str, locale: &Locale) -> String {
        self.catalog_default(application, locale)
            .await
            .unwrap_or_else(|| self.policy.message().to_string())
    }

    async fn catalog_default(&self, application: &str, locale: &Locale) -> Option<String> {
        let template = self
            .resolve(application, self.policy.module(), self.policy.code(), locale)
            .await;

        if template.is_none() {
            tracing::error!(
                api = %application,
                module = %self.policy.module(),
                code = %self.policy.code(),
                "Could not find default exception definition"
            );
        }

        template.map(|t| format_message(&t, &[application]))
    }
}
