use crate::{ReadRepository, Repository, Result, StorageError, UrlRecord};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use jiff::Timestamp;
use linkhop_core::{LongUrl, ShortCode};

/// In-memory storage entry for a URL mapping.
#[derive(Debug, Clone)]
struct Entry {
    original_url: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Entry {
    fn into_record(self, code: &ShortCode) -> UrlRecord {
        UrlRecord {
            short_code: code.clone(),
            original_url: self.original_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// In-memory implementation of the Repository trait using DashMap.
///
/// Inserts go through the shard-locked entry API, so the vacancy check and
/// the write happen under one lock and concurrent inserts of the same code
/// cannot both succeed. Only suitable for a single process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Entry>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone().into_record(code)))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, original_url: &LongUrl) -> Result<()> {
        match self.storage.entry(code.as_str().to_owned()) {
            MapEntry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            MapEntry::Vacant(slot) => {
                let now = Timestamp::now();
                slot.insert(Entry {
                    original_url: original_url.as_str().to_owned(),
                    created_at: now,
                    updated_at: now,
                });
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn url(s: &str) -> LongUrl {
        LongUrl::parse(s).unwrap()
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc12345"), &url("https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc12345")).await.unwrap().unwrap();
        assert_eq!(result.short_code, code("abc12345"));
        assert_eq!(result.original_url, "https://example.com");
        assert_eq!(result.created_at, result.updated_at);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope1234")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc12345"), &url("https://example.com"))
            .await
            .unwrap();

        assert!(repo.get(&code("ABC12345")).await.unwrap().is_none());
        assert!(repo.get(&code("abc12345 ")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_conflict_keeps_first_record() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc12345"), &url("https://one.example"))
            .await
            .unwrap();

        let err = repo
            .insert(&code("abc12345"), &url("https://two.example"))
            .await
            .unwrap_err();

        assert!(err.is_short_code_conflict());
        let stored = repo.get(&code("abc12345")).await.unwrap().unwrap();
        assert_eq!(stored.original_url, "https://one.example");
    }

    #[tokio::test]
    async fn same_url_under_many_codes() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("aaaaaaaa"), &url("https://example.com"))
            .await
            .unwrap();
        repo.insert(&code("bbbbbbbb"), &url("https://example.com"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_of_one_code_admit_exactly_one() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..32u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let target = url(&format!("https://example{i}.com"));
                repo.insert(&code("contested"), &target).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(err) => assert!(err.is_short_code_conflict()),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }
}
