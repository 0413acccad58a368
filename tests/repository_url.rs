//! PostgreSQL repository tests.
//!
//! Run with a database available:
//! `DATABASE_URL=postgres://... cargo test --test repository_url -- --ignored`

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::domain::entities::NewShortUrl;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence::PgUrlRepository;

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo
        .insert(NewShortUrl::new("https://example.com", "abc123"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.short_code, "abc123");
    assert_eq!(created.original_url, "https://example.com");
    assert!(created.is_active);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_duplicate_code(pool: PgPool) {
    common::create_test_url(&pool, "dup123", "https://first.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let err = repo
        .insert(NewShortUrl::new("https://second.com", "dup123"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_code_of_inactive_record(pool: PgPool) {
    common::create_inactive_url(&pool, "old123", "https://old.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let err = repo
        .insert(NewShortUrl::new("https://new.com", "old123"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_url(&pool, "AbC123", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_code("AbC123").await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://example.com");

    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_by_code_skips_inactive(pool: PgPool) {
    common::create_inactive_url(&pool, "old123", "https://old.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("old123").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_active_order(pool: PgPool) {
    for (code, offset) in [("t1aaaa", 3), ("t2bbbb", 2), ("t3cccc", 1)] {
        sqlx::query(
            "INSERT INTO urls (original_url, short_code, created_at) \
             VALUES ($1, $2, NOW() - make_interval(mins => $3))",
        )
        .bind(format!("https://{code}.com"))
        .bind(code)
        .bind(offset)
        .execute(&pool)
        .await
        .unwrap();
    }
    common::create_inactive_url(&pool, "gone00", "https://gone.com").await;

    let repo = PgUrlRepository::new(Arc::new(pool));
    let codes: Vec<String> = repo
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.short_code)
        .collect();

    assert_eq!(codes, vec!["t3cccc", "t2bbbb", "t1aaaa"]);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_by_code(pool: PgPool) {
    let id = common::create_test_url(&pool, "ABC123", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let snapshot = repo.delete_by_code("ABC123").await.unwrap().unwrap();
    assert_eq!(snapshot.id, id);
    assert!(snapshot.is_active);

    assert!(repo.find_by_code("ABC123").await.unwrap().is_none());
    assert!(repo.delete_by_code("ABC123").await.unwrap().is_none());

    let still_stored: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE id = $1)")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(still_stored);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_nonexistent(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.delete_by_code("ZZZZZZ").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
