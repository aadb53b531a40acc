pub mod random;

pub use random::{RandomGenerator, RandomGeneratorSettings};

use linkhop_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is settled by the repository when the candidate is inserted.
/// Each call must be independent of the previous ones.
pub trait Generator: Send + Sync + 'static {
    /// Produces one candidate short code.
    fn generate(&self) -> ShortCode;
}
