//! Translation store trait defining the lookup the resolver needs.

use async_trait::async_trait;

use crate::domain::entities::TranslationKey;
use crate::errors::DomainError;

/// Read-only access to the translation catalog.
///
/// Implementations are shared by every concurrent request, so lookups must be
/// safe to run concurrently. There is no write path.
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Find the template stored for exactly `key`
    ///
    /// # Returns
    /// * `Ok(Some(template))` when the catalog has an entry; at most one is considered
    /// * `Ok(None)` when it has none
    /// * `Err(DomainError)` when the catalog cannot be queried
    async fn find_description(&self, key: &TranslationKey) -> Result<Option<String>, DomainError>;
}
