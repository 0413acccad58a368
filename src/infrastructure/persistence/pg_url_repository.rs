//! PostgreSQL implementation of the URL repository.
//!
//! Every call checks out its own pooled connection and hands it back when the
//! call returns, on success and error alike. Mutations run inside a
//! transaction; a transaction dropped without `commit` is rolled back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by every query against `urls`.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl From<UrlRow> for ShortUrl {
    fn from(row: UrlRow) -> Self {
        ShortUrl::new(
            row.id,
            row.original_url,
            row.short_code,
            row.created_at,
            row.is_active,
        )
    }
}

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Code uniqueness is enforced by the `urls_short_code_key` constraint.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code, is_active)
            VALUES ($1, $2, TRUE)
            RETURNING id, original_url, short_code, created_at, is_active
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, is_active
            FROM urls
            WHERE short_code = $1 AND is_active
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn list_active(&self) -> Result<Vec<ShortUrl>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, is_active
            FROM urls
            WHERE is_active
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let mut tx = self.pool.begin().await?;

        // RETURNING reports the row before the flag flip.
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls
            SET is_active = FALSE
            WHERE short_code = $1 AND is_active
            RETURNING id, original_url, short_code, created_at, TRUE AS is_active
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("SELECT 1").execute(&mut *conn).await?;

        Ok(())
    }
}
