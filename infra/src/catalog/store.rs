//! File-backed TranslationStore

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use rexh_core::domain::entities::TranslationKey;
use rexh_core::errors::DomainError;
use rexh_core::repositories::TranslationStore;
use rexh_shared::Locale;

use crate::InfrastructureError;

/// One `[[translations]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub application: String,
    pub module: String,
    pub code: String,
    pub locale: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    translations: Vec<CatalogEntry>,
}

/// Read-only in-memory catalog, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslationStore {
    entries: HashMap<TranslationKey, String>,
}

impl CatalogTranslationStore {
    /// Build from entries; the first entry for a key wins
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            let key = TranslationKey::new(
                &entry.application,
                &entry.module,
                &entry.code,
                &Locale::new(&entry.locale),
            );
            map.entry(key).or_insert(entry.value);
        }
        Self { entries: map }
    }

    /// Parse catalog TOML; `origin` names the source in errors
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self, InfrastructureError> {
        let file: CatalogFile = toml::from_str(source).map_err(|e| InfrastructureError::Catalog {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_entries(file.translations))
    }

    /// Load a catalog file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| InfrastructureError::Catalog {
                path: origin.clone(),
                message: e.to_string(),
            })?;

        let store = Self::from_toml_str(&source, &origin)?;
        tracing::info!(path = %origin, entries = store.len(), "Translation catalog loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl TranslationStore for CatalogTranslationStore {
    async fn find_description(&self, key: &TranslationKey) -> Result<Option<String>, DomainError> {
        Ok(self.entries.get(key).cloned())
    }
}
