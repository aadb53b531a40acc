use std::sync::Arc;

use crate::redirector::Redirector;
use crate::{RedirectorError, Result};
use async_trait::async_trait;
use linkhop_core::{ReadRepository, ShortCode, UrlRecord};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only repository to fetch URL records. Lookups are never
/// retried here; a failed read is reported to the caller as-is.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its stored record.
    ///
    /// # Returns
    ///
    /// * `Ok(record)` - The record holding exactly this code
    /// * `Err(RedirectorError::NotFound)` - If no record holds the code
    /// * `Err(RedirectorError::Storage)` - If the repository read failed
    pub async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code).await? {
            Some(record) => {
                debug!(code = %code, url = %record.original_url, "resolved short code");
                Ok(record)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(RedirectorError::NotFound(code.to_string()))
            }
        }
    }
}
