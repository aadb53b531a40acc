use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Symbols a generated short code is drawn from.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Shortest code the system will ever issue.
pub const MIN_LENGTH: usize = 8;

/// Longest code the store can hold (`short_code VARCHAR(64)`).
pub const MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortCodeError {
    #[error("length must be at least {min}, got {actual}")]
    TooShort { min: usize, actual: usize },
    #[error("length must be at most {max}, got {actual}")]
    TooLong { max: usize, actual: usize },
    #[error("must contain only lowercase ascii letters and digits: '{0}'")]
    InvalidCharacter(String),
}

/// The identifier portion of a short URL.
///
/// Codes produced by the generator are [`MIN_LENGTH`] to [`MAX_LENGTH`]
/// characters drawn from [`ALPHABET`]. Codes taken from an incoming request path are
/// wrapped verbatim with [`ShortCode::new_unchecked`] so lookups stay
/// exact-match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after checking length and alphabet.
    pub fn new(code: impl Into<String>) -> Result<Self, ShortCodeError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this for codes produced by the generator or for verbatim
    /// lookup keys that only need to be compared against the store.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), ShortCodeError> {
        if code.len() < MIN_LENGTH {
            return Err(ShortCodeError::TooShort {
                min: MIN_LENGTH,
                actual: code.len(),
            });
        }

        if code.len() > MAX_LENGTH {
            return Err(ShortCodeError::TooLong {
                max: MAX_LENGTH,
                actual: code.len(),
            });
        }

        if !code.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(ShortCodeError::InvalidCharacter(code.to_owned()));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("abcd1234").is_ok());
        assert!(ShortCode::new("0000000000").is_ok());
        assert!(ShortCode::new("z".repeat(64)).is_ok());
    }

    #[test]
    fn too_short() {
        assert_eq!(
            ShortCode::new("abc1234").unwrap_err(),
            ShortCodeError::TooShort { min: 8, actual: 7 }
        );
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert_eq!(
            ShortCode::new("z".repeat(65)).unwrap_err(),
            ShortCodeError::TooLong { max: 64, actual: 65 }
        );
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("ABCD1234").is_err());
        assert!(ShortCode::new("abcd-1234").is_err());
        assert!(ShortCode::new("abcd_1234").is_err());
        assert!(ShortCode::new("abcd 1234").is_err());
    }

    #[test]
    fn unchecked_keeps_input_verbatim() {
        let code = ShortCode::new_unchecked("MiXeD/Case ");
        assert_eq!(code.as_str(), "MiXeD/Case ");
    }

    #[test]
    fn to_url_joins_with_single_slash() {
        let code = ShortCode::new("abc12345").unwrap();
        assert_eq!(code.to_url("https://lnk.hop"), "https://lnk.hop/abc12345");
        assert_eq!(code.to_url("https://lnk.hop/"), "https://lnk.hop/abc12345");
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new("abc12345").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"abc12345\"");
    }
}
