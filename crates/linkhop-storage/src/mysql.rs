use crate::{ReadRepository, Repository, Result, StorageError, UrlRecord};
use async_trait::async_trait;
use jiff::Timestamp;
use linkhop_core::{LongUrl, ShortCode};
use sqlx::error::DatabaseError;
use sqlx::{MySqlPool, Row};
use tracing::info;

/// Name of the unique key guarding `short_urls.short_code`.
const SHORT_CODE_KEY: &str = "uk_short_code";

const SCHEMA: &str = include_str!("../ddl/mysql/short_urls.sql");

/// MySQL implementation of the repository contract.
///
/// Uniqueness of short codes is enforced by the `uk_short_code` key, so
/// concurrent inserts from any number of gateway instances are arbitrated
/// by InnoDB. Rows are never updated or deleted.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `short_urls` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        info!("short_urls schema is in place");
        Ok(())
    }
}

fn parse_timestamp(column: &str, seconds: i64) -> Result<Timestamp> {
    Timestamp::from_second(seconds).map_err(|e| {
        StorageError::InvalidData(format!("invalid {column} timestamp '{seconds}': {e}"))
    })
}

/// A duplicate key on `uk_short_code`, as opposed to any other unique key.
///
/// MySQL does not expose the violated constraint through the driver, so the
/// key name is matched in the server message
/// (`Duplicate entry '...' for key 'short_urls.uk_short_code'`).
fn is_short_code_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|db| {
        db.is_unique_violation()
            && match db.constraint() {
                Some(constraint) => constraint == SHORT_CODE_KEY,
                None => mentions_short_code_key(db),
            }
    })
}

fn mentions_short_code_key(db: &dyn DatabaseError) -> bool {
    db.message().contains(SHORT_CODE_KEY)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        let row = sqlx::query(
            r#"
            SELECT original_url, created_at, updated_at
            FROM short_urls
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;
        let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
        let updated_at: i64 = row.try_get("updated_at").map_err(map_sqlx_error)?;

        Ok(Some(UrlRecord {
            short_code: code.clone(),
            original_url,
            created_at: parse_timestamp("created_at", created_at)?,
            updated_at: parse_timestamp("updated_at", updated_at)?,
        }))
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, code: &ShortCode, original_url: &LongUrl) -> Result<()> {
        let now = Timestamp::now().as_second();

        let result = sqlx::query(
            r#"
            INSERT INTO short_urls (short_code, original_url, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(code.as_str())
        .bind(original_url.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_short_code_violation(&err) => {
                Err(StorageError::Conflict(code.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_are_classified() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StorageError::Timeout(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StorageError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StorageError::InvalidData(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::Protocol("bad packet".into())),
            StorageError::Query(_)
        ));
    }

    #[test]
    fn non_database_errors_are_never_conflicts() {
        assert!(!is_short_code_violation(&sqlx::Error::PoolTimedOut));
        assert!(!map_sqlx_error(sqlx::Error::PoolClosed).is_short_code_conflict());
    }

    #[test]
    fn out_of_range_timestamp_is_invalid_data() {
        assert!(matches!(
            parse_timestamp("created_at", i64::MAX),
            Err(StorageError::InvalidData(_))
        ));
        assert_eq!(
            parse_timestamp("created_at", 0).unwrap(),
            Timestamp::UNIX_EPOCH
        );
    }
}
