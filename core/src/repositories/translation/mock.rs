//! In-memory implementation of TranslationStore for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rexh_shared::Locale;

use crate::domain::entities::TranslationKey;
use crate::errors::DomainError;

use super::TranslationStore;

/// In-memory translation catalog
#[derive(Clone, Default)]
pub struct MockTranslationStore {
    entries: Arc<Mutex<HashMap<TranslationKey, String>>>,
    queries: Arc<Mutex<Vec<TranslationKey>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockTranslationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template
    pub fn insert(
        &self,
        application: &str,
        module: &str,
        code: &str,
        locale: &str,
        template: &str,
    ) {
        let key = TranslationKey::new(application, module, code, &Locale::new(locale));
        self.entries.lock().unwrap().insert(key, template.to_string());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_entry(
        self,
        application: &str,
        module: &str,
        code: &str,
        locale: &str,
        template: &str,
    ) -> Self {
        self.insert(application, module, code, locale, template);
        self
    }

    /// Set whether lookups should fail as an unreachable catalog would
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Keys looked up so far, in order
    pub fn queried_keys(&self) -> Vec<TranslationKey> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationStore for MockTranslationStore {
    async fn find_description(&self, key: &TranslationKey) -> Result<Option<String>, DomainError> {
        self.queries.lock().unwrap().push(key.clone());

        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Store {
                message: "Mock store unavailable".to_string(),
            });
        }

        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}
