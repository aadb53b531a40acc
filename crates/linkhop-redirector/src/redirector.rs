use crate::Result;
use async_trait::async_trait;
use linkhop_core::{ShortCode, UrlRecord};

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its stored URL record.
    ///
    /// The code is compared against the store exactly as given.
    async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord>;
}
