//! DTOs for short URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// The original URL to shorten (must be a well-formed absolute URL).
    #[validate(
        url(message = "Invalid URL"),
        length(max = 2048, message = "URL must be at most 2048 characters")
    )]
    pub original_url: String,
}

/// Public representation of a short URL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOut {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortUrl> for UrlOut {
    fn from(url: ShortUrl) -> Self {
        Self {
            id: url.id,
            original_url: url.original_url,
            short_code: url.short_code,
            created_at: url.created_at,
        }
    }
}

/// `data` payload of a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedUrlData {
    pub url: UrlOut,
}

/// `data` payload of the listing endpoint.
#[derive(Debug, Serialize)]
pub struct UrlListData {
    pub urls: Vec<UrlOut>,
}
