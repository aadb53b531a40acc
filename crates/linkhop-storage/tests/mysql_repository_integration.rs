//! Runs against a disposable MySQL container; needs a Docker daemon.
//! Run with `cargo test -p linkhop-storage -- --ignored`.

use linkhop_core::{LongUrl, ShortCode};
use linkhop_storage::{MySqlRepository, ReadRepository, Repository, StorageError};
use linkhop_test_infra::mysql::{MySqlServer, MysqlConfig};

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::start(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let pool = mysql.connect().await.expect("connect mysql");

        let repo = MySqlRepository::new(pool);
        repo.migrate().await.expect("create schema");

        Self {
            _mysql: mysql,
            repo,
        }
    }
}

fn code(value: &str) -> ShortCode {
    ShortCode::new_unchecked(value)
}

fn url(value: &str) -> LongUrl {
    LongUrl::parse(value).unwrap()
}

#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn insert_and_get_record() {
    let fixture = Fixture::start().await;
    let short_code = code("abc12345");

    fixture
        .repo
        .insert(&short_code, &url("https://example.com"))
        .await
        .unwrap();

    let got = fixture.repo.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.short_code, short_code);
    assert_eq!(got.original_url, "https://example.com");
    assert_eq!(got.created_at, got.updated_at);
}

#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn insert_conflicts_when_code_already_exists() {
    let fixture = Fixture::start().await;
    let short_code = code("abc12345");

    fixture
        .repo
        .insert(&short_code, &url("https://one.example"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .insert(&short_code, &url("https://two.example"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Conflict(_)));
    assert!(err.is_short_code_conflict());
}

#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn lookup_is_case_sensitive() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(&code("abc12345"), &url("https://example.com"))
        .await
        .unwrap();

    assert!(fixture.repo.get(&code("ABC12345")).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn get_returns_none_for_unknown_code() {
    let fixture = Fixture::start().await;

    assert!(fixture.repo.get(&code("missing1")).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn migrate_is_idempotent() {
    let fixture = Fixture::start().await;

    fixture.repo.migrate().await.unwrap();
}
