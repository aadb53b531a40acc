//! Core types and traits for the Linkhop URL shortener.
//!
//! This crate provides shared types and traits used by the shortener
//! (write path), the redirector (read path), and the storage backends.

pub mod error;
pub mod long_url;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{ShortenerError, StorageError, ValidationError};
pub use long_url::LongUrl;
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::{ShortCode, ShortCodeError};
pub use shortener::Shortener;
