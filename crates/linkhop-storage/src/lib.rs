//! Storage backends for Linkhop.
//!
//! Both backends enforce short code uniqueness inside the store itself:
//! [`InMemoryRepository`] through an atomic map entry, [`MySqlRepository`]
//! through a unique key on `short_code`.

pub mod memory;
pub mod mysql;

pub use linkhop_core::repository::{ReadRepository, Repository, Result, UrlRecord};
pub use linkhop_core::StorageError;
pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
