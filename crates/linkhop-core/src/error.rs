use thiserror::Error;

/// Errors reported by a storage backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The short code is already held by another record.
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Returns `true` if this error reports a uniqueness violation on the
    /// short code, and nothing else.
    ///
    /// Backends are responsible for mapping their native duplicate-key
    /// signal onto [`StorageError::Conflict`]; every other constraint
    /// failure must surface as a different variant.
    pub fn is_short_code_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict(_))
    }
}

/// Reasons a long URL fails the input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("url is missing or not a string")]
    Missing,
    #[error("url is empty")]
    Empty,
    #[error("url is {length} characters long, the limit is {max}")]
    TooLong { length: usize, max: usize },
    #[error("url cannot be parsed: {0}")]
    Malformed(String),
    #[error("url scheme must be http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("url has no host")]
    MissingHost,
}

/// Errors returned by the allocation (write) path.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// Every attempt collided with an existing short code.
    #[error("short code allocation exhausted after {attempts} attempts")]
    Exhausted { attempts: usize },
    /// A non-collision storage failure; never retried.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_conflict_counts_as_short_code_conflict() {
        assert!(StorageError::Conflict("abcdefgh".into()).is_short_code_conflict());

        for err in [
            StorageError::Unavailable("down".into()),
            StorageError::Timeout("slow".into()),
            StorageError::Query("duplicate entry for key 'other'".into()),
            StorageError::InvalidData("bad row".into()),
            StorageError::Operation("oops".into()),
        ] {
            assert!(!err.is_short_code_conflict(), "{err} must not be a conflict");
        }
    }

    #[test]
    fn storage_error_converts_into_shortener_error() {
        let err: ShortenerError = StorageError::Timeout("pool".into()).into();
        assert!(matches!(err, ShortenerError::Storage(StorageError::Timeout(_))));
    }
}
