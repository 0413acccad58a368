//! Short URL allocation, lookup, listing and deletion.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, DEFAULT_CODE_LENGTH};

/// Number of candidate codes tried before allocation gives up.
pub const MAX_RETRIES: usize = 5;

const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Service for creating and managing short URLs.
///
/// The collision pre-check against the store only reduces failed inserts; the
/// store's unique constraint decides. A lost race surfaces as
/// [`AppError::UniquenessViolation`] and is not retried here.
pub struct UrlService<R: UrlRepository + ?Sized = dyn UrlRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Shortens `original_url` and persists the new record.
    ///
    /// Only the scheme prefix is checked here; full URL syntax is validated by
    /// the request layer before this is called.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is empty or not `http(s)://`.
    /// Returns [`AppError::AllocationExhausted`] if [`MAX_RETRIES`] candidates all collide.
    /// Returns [`AppError::UniquenessViolation`] or [`AppError::Store`] if the insert fails.
    pub async fn create_short_url(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        validate_original_url(original_url)?;

        let short_code = self.allocate_code().await?;

        let created = self
            .repository
            .insert(NewShortUrl::new(original_url, short_code))
            .await?;

        tracing::info!(
            id = created.id,
            short_code = %created.short_code,
            "Short URL created"
        );

        Ok(created)
    }

    /// Returns the active record for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record matches.
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Lists all active records, newest first.
    pub async fn list_active(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list_active().await
    }

    /// Deactivates the record for `code` and returns its pre-deletion snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record matches.
    pub async fn delete(&self, code: &str) -> Result<ShortUrl, AppError> {
        let deleted = self
            .repository
            .delete_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        tracing::info!(id = deleted.id, short_code = %deleted.short_code, "Short URL deleted");

        Ok(deleted)
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Draws candidates until one is free among active records.
    async fn allocate_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_RETRIES {
            let candidate = self.generator.generate(DEFAULT_CODE_LENGTH);

            if self.repository.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            tracing::debug!(attempt, code = %candidate, "Short code collision");
        }

        tracing::warn!(attempts = MAX_RETRIES, "Short code allocation exhausted");

        Err(AppError::AllocationExhausted {
            attempts: MAX_RETRIES,
        })
    }
}

/// Rejects URLs that are empty or lack an `http://` / `https://` prefix.
pub fn validate_original_url(original_url: &str) -> Result<(), AppError> {
    if original_url.is_empty()
        || !ALLOWED_SCHEMES
            .iter()
            .any(|scheme| original_url.starts_with(scheme))
    {
        return Err(AppError::invalid_input("Invalid URL"));
    }

    Ok(())
}
