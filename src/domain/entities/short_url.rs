//! Short URL entity representing a persisted code → URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record as stored.
///
/// `id` and `created_at` are assigned by the store on insert. Records are never
/// edited; deletion only clears `is_active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            is_active,
        }
    }
}

/// Input data for inserting a new short URL.
///
/// New records are always active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
}

impl NewShortUrl {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_creation() {
        let now = Utc::now();
        let url = ShortUrl::new(
            1,
            "https://example.com".to_string(),
            "aB3xY9".to_string(),
            now,
            true,
        );

        assert_eq!(url.id, 1);
        assert_eq!(url.original_url, "https://example.com");
        assert_eq!(url.short_code, "aB3xY9");
        assert_eq!(url.created_at, now);
        assert!(url.is_active);
    }

    #[test]
    fn test_new_short_url_creation() {
        let new_url = NewShortUrl::new("https://rust-lang.org", "Zz0Zz0");

        assert_eq!(new_url.original_url, "https://rust-lang.org");
        assert_eq!(new_url.short_code, "Zz0Zz0");
    }
}
