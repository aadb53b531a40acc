use std::sync::Arc;

use linkhop_core::Shortener;
use linkhop_redirector::Redirector;

/// Handles shared by every request. Holds no mutable state of its own;
/// all coordination between requests goes through the repository.
#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = public_base_url.into();
        Self {
            shortener,
            redirector,
            base_url: base_url.trim_end_matches('/').into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    /// Public base address short codes are appended to, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
