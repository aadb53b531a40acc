//! Redirector service library.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes
//! to their original URLs through a read-only repository.
//!
//! # Example
//!
//! ```rust
//! use linkhop_core::{LongUrl, Repository, ShortCode};
//! use linkhop_redirector::RedirectorService;
//! use linkhop_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = InMemoryRepository::new();
//! let code = ShortCode::new("abc12345")?;
//! repo.insert(&code, &LongUrl::parse("https://example.com")?).await?;
//!
//! let service = RedirectorService::new(repo);
//! let record = service.resolve(&code).await?;
//! println!("Redirect to: {}", record.original_url);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::RedirectorService;
