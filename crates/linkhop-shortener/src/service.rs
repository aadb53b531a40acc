use crate::generator::Generator;
use async_trait::async_trait;
use linkhop_core::{LongUrl, Repository, ShortCode, Shortener, ShortenerError};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Upper bound on insert attempts for a single shortening request.
pub const MAX_ATTEMPTS: usize = 10;

/// A concrete implementation of the `Shortener` trait.
///
/// Each request generates a candidate code and tries to insert it. The
/// repository's uniqueness check is the only arbiter of collisions; this
/// service keeps no record of codes it has handed out. Attempts run one
/// after another, and only a short code conflict earns another attempt.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self::from_shared(Arc::new(repository), generator)
    }

    /// Builds a service over a repository that is also used elsewhere,
    /// e.g. by a redirector in the same process.
    pub fn from_shared(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: LongUrl) -> Result<ShortCode, ShortenerError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = self.generator.generate();

            match self.repository.insert(&candidate, &original_url).await {
                Ok(()) => {
                    info!(short_code = %candidate, attempt, "allocated short code");
                    return Ok(candidate);
                }
                Err(err) if err.is_short_code_conflict() => {
                    debug!(short_code = %candidate, attempt, "short code collision");
                }
                Err(err) => {
                    error!(short_code = %candidate, attempt, error = %err, "failed to store short code");
                    return Err(ShortenerError::Storage(err));
                }
            }
        }

        warn!(attempts = MAX_ATTEMPTS, "short code allocation exhausted");
        Err(ShortenerError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
