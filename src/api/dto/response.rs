//! Success envelope shared by all JSON endpoints.
//!
//! Failures use [`crate::error::ErrorBody`].

use serde::Serialize;

/// `{"status": "success", "data": ..., "message": ...}` with absent fields omitted.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            data: None,
            message: Some(message.into()),
        }
    }
}
