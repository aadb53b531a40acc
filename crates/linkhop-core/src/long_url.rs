use crate::error::ValidationError;
use serde::Serialize;
use std::fmt::Display;
use url::Url;

/// Upper bound on the length of a URL accepted for shortening, in characters.
pub const MAX_LENGTH: usize = 2048;

/// A long URL that has passed the input contract.
///
/// The original text is kept verbatim: it is what gets stored and what the
/// redirect points at. Holding a `LongUrl` is the only way into the
/// allocation path, so an unvalidated string can never be persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LongUrl(String);

impl LongUrl {
    /// Validates `input` and wraps it.
    ///
    /// The URL must be non-empty, at most [`MAX_LENGTH`] characters, parse
    /// as an absolute URL, use the `http` or `https` scheme and name a host.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();

        if input.is_empty() {
            return Err(ValidationError::Empty);
        }

        let length = input.chars().count();
        if length > MAX_LENGTH {
            return Err(ValidationError::TooLong {
                length,
                max: MAX_LENGTH,
            });
        }

        let parsed = Url::parse(&input).map_err(|e| ValidationError::Malformed(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ValidationError::UnsupportedScheme(other.to_owned())),
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingHost);
        }

        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LongUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LongUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
