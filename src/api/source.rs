use async_trait::async_trait;

use super::error::LookupError;
use super::model::Record;

/// Where records come from.
///
/// The controller only talks to this trait, so tests can substitute a
/// scripted source for the HTTP client.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the record for `query`, used verbatim as the lookup key.
    ///
    /// A single attempt: implementations must not retry.
    async fn fetch(&self, query: &str) -> Result<Record, LookupError>;
}
