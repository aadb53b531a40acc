//! URL shortener service implementation.
//!
//! This crate provides the short code generator and the allocation service
//! that persists long→short mappings. Core types live in `linkhop_core`.

pub mod error;
pub mod generator;
pub mod service;

pub use error::GeneratorError;
pub use generator::{Generator, RandomGenerator, RandomGeneratorSettings};
pub use service::{ShortenerService, MAX_ATTEMPTS};
