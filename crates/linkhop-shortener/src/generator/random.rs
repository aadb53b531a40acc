use crate::error::GeneratorError;
use crate::generator::Generator;
use linkhop_core::shortcode::{ALPHABET, MAX_LENGTH, MIN_LENGTH};
use linkhop_core::ShortCode;
use rand::Rng;
use typed_builder::TypedBuilder;

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomGeneratorSettings {
    /// Number of symbols per code, within [`MIN_LENGTH`]..=[`MAX_LENGTH`].
    #[builder(default = MIN_LENGTH)]
    pub length: usize,
}

/// Draws every symbol uniformly and independently from `[a-z0-9]`.
///
/// Backed by the thread-local CSPRNG, so concurrent handlers never share
/// generator state and codes are not predictable from earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new(settings: RandomGeneratorSettings) -> Result<Self, GeneratorError> {
        if settings.length < MIN_LENGTH {
            return Err(GeneratorError::LengthTooShort {
                length: settings.length,
                min: MIN_LENGTH,
            });
        }
        if settings.length > MAX_LENGTH {
            return Err(GeneratorError::LengthTooLong {
                length: settings.length,
                max: MAX_LENGTH,
            });
        }

        Ok(Self {
            length: settings.length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self { length: MIN_LENGTH }
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
