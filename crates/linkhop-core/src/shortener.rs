use crate::long_url::LongUrl;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Allocates a fresh short code for `original_url` and persists the
    /// mapping. Submitting the same URL twice yields two distinct codes.
    async fn shorten(&self, original_url: LongUrl) -> Result<ShortCode>;
}
