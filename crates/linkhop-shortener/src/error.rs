use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("short code length {length} is below the minimum of {min}")]
    LengthTooShort { length: usize, min: usize },
    #[error("short code length {length} exceeds the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },
}
