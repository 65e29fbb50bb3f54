//! Translation store selection at startup
//!
//! 1. datasource with a URL: a dedicated `GEH_<name>` pool
//! 2. datasource without a URL: the registered pool of that name, which must exist
//! 3. no datasource: the TOML catalog at `catalog_path`
//! 4. none of the above: startup error

use std::sync::Arc;

use rexh_core::repositories::TranslationStore;
use rexh_shared::ExceptionHandlerConfig;

use crate::catalog::CatalogTranslationStore;
use crate::database::{DatabasePool, DatasourceRegistry, MySqlTranslationRepository};
use crate::InfrastructureError;

/// Build the store the normalizer reads translations from
pub async fn build_translation_store(
    config: &ExceptionHandlerConfig,
    registry: &DatasourceRegistry,
) -> Result<Arc<dyn TranslationStore>, InfrastructureError> {
    if let Some(datasource) = &config.datasource {
        let pool = if datasource.creates_own_pool() {
            DatabasePool::for_datasource(datasource).await?
        } else {
            registry.require(datasource.name.trim())?.clone()
        };

        tracing::info!(
            pool = %pool.name(),
            schema = %datasource.normalized_schema(),
            "Translations are read from the database"
        );

        let repository =
            MySqlTranslationRepository::new(pool.get_pool().clone(), &datasource.normalized_schema())?;
        return Ok(Arc::new(repository));
    }

    match config.catalog_path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => {
            let store = CatalogTranslationStore::load(path).await?;
            Ok(Arc::new(store))
        }
        _ => Err(InfrastructureError::Config(
            "exception_handler needs either a datasource or a catalog_path".to_string(),
        )),
    }
}
