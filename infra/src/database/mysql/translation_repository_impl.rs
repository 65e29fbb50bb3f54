//! MySQL implementation of the TranslationStore trait.
//!
//! Reads exception texts from `<schema>.api_translations`.

use async_trait::async_trait;
use sqlx::MySqlPool;

use rexh_core::domain::entities::TranslationKey;
use rexh_core::errors::DomainError;
use rexh_core::repositories::TranslationStore;
use rexh_shared::config::database::is_sql_identifier;
use rexh_shared::error_codes;

use crate::InfrastructureError;

/// MySQL implementation of TranslationStore
#[derive(Clone, Debug)]
pub struct MySqlTranslationRepository {
    pool: MySqlPool,
    query: String,
}

impl MySqlTranslationRepository {
    /// Create a repository reading from `schema`.
    ///
    /// The schema is lowercased and must be a plain identifier, since it is
    /// interpolated into the query text.
    pub fn new(pool: MySqlPool, schema: &str) -> Result<Self, InfrastructureError> {
        let schema = schema.trim().to_lowercase();
        if !is_sql_identifier(&schema) {
            return Err(InfrastructureError::Config(format!(
                "'{}' is not a valid schema name",
                schema
            )));
        }

        Ok(Self {
            pool,
            query: Self::lookup_query(&schema),
        })
    }

    fn lookup_query(schema: &str) -> String {
        format!(
            "SELECT value FROM {}.api_translations \
             WHERE application = ? AND module = ? AND code = ? AND locale = ? AND type = '{}' \
             LIMIT 1",
            schema,
            error_codes::TRANSLATION_TYPE_EXCEPTION
        )
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[async_trait]
impl TranslationStore for MySqlTranslationRepository {
    async fn find_description(&self, key: &TranslationKey) -> Result<Option<String>, DomainError> {
        sqlx::query_scalar::<_, String>(&self.query)
            .bind(&key.application)
            .bind(&key.module)
            .bind(&key.code)
            .bind(key.locale.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to query translation {}: {}", key, e),
            })
    }
}
