use async_trait::async_trait;

use crate::error::LookupError;
use crate::models::LookupRecord;

/// Uniform read access to a tabular key→record store, one table per domain.
/// Must be safe to call concurrently for different tables and keys.
#[async_trait]
pub trait LookupSource: Send + Sync {
    /// First record in `table` whose code matches `key` case-insensitively.
    /// `Ok(None)` means the key has no record; `Err` means the source itself
    /// was unavailable.
    async fn get_record(
        &self,
        table: &str,
        key: &str,
    ) -> Result<Option<LookupRecord>, LookupError>;
}
