//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Constraint name reported on duplicate codes, matching the SQL schema.
const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Process-local repository keyed by short code.
///
/// Uses the `DashMap` entry API for an atomic check-and-insert, so concurrent
/// inserts of the same code cannot both succeed. Deleted records stay in the
/// map with `is_active = false` and keep their code reserved.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    storage: DashMap<String, ShortUrl>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records, including deactivated ones.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        match self.storage.entry(new_url.short_code.clone()) {
            Entry::Occupied(_) => Err(AppError::UniquenessViolation {
                constraint: Some(SHORT_CODE_CONSTRAINT.to_string()),
            }),
            Entry::Vacant(slot) => {
                let record = ShortUrl::new(
                    self.next_id.fetch_add(1, Ordering::SeqCst),
                    new_url.original_url,
                    new_url.short_code,
                    Utc::now(),
                    true,
                );
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self
            .storage
            .get(code)
            .filter(|entry| entry.is_active)
            .map(|entry| entry.value().clone()))
    }

    async fn list_active(&self) -> Result<Vec<ShortUrl>, AppError> {
        let mut urls: Vec<ShortUrl> = self
            .storage
            .iter()
            .filter(|entry| entry.is_active)
            .map(|entry| entry.value().clone())
            .collect();

        urls.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(urls)
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let Some(mut entry) = self.storage.get_mut(code) else {
            return Ok(None);
        };

        if !entry.is_active {
            return Ok(None);
        }

        let snapshot = entry.value().clone();
        entry.is_active = false;

        Ok(Some(snapshot))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
