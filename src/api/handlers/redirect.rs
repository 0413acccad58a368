//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /u/{code}`
///
/// Lookup is case-sensitive and only matches active records.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist or was deleted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.url_service.resolve(&code).await?;

    tracing::debug!(short_code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url.original_url)]).into_response())
}
