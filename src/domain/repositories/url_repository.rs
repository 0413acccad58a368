//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface consumed by the allocation service.
///
/// The store is the authority on code uniqueness: `insert` must reject a code
/// that already exists on any record, active or not, even if a preceding
/// `find_by_code` reported it free.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new active record and returns it with its assigned `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UniquenessViolation`] if the short code is already taken.
    /// Returns [`AppError::Store`] on database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds the active record with exactly this short code.
    ///
    /// Matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists all active records, newest first.
    ///
    /// Records sharing a `created_at` are ordered by `id` descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_active(&self) -> Result<Vec<ShortUrl>, AppError>;

    /// Deactivates the active record with this short code.
    ///
    /// Returns the record as it was before deletion, or `None` if no active
    /// record matched. The code stays reserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
