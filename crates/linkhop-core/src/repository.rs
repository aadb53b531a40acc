use crate::error::StorageError;
use crate::long_url::LongUrl;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored long→short mapping.
///
/// Records are created once and never mutated; the timestamps are stamped
/// by the store and exist for auditing only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The short code the record is keyed by.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing services like the redirector to have read-only access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record whose short code equals `code` exactly.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new record if no record holds `code` yet.
    ///
    /// The check and the insert must be atomic with respect to concurrent
    /// inserts of the same code from any process. A taken code is reported
    /// as [`StorageError::Conflict`]; every other failure uses another variant.
    async fn insert(&self, code: &ShortCode, original_url: &LongUrl) -> Result<()>;
}
