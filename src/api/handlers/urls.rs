//! Handlers for short URL management (create, list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::response::ApiResponse;
use crate::api::dto::url::{CreateUrlRequest, CreatedUrlData, UrlListData, UrlOut};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "url": {
///       "id": 1,
///       "original_url": "https://example.com/page",
///       "short_code": "aZ3kQ9",
///       "created_at": "2024-06-01T12:00:00Z"
///     }
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed or not `http(s)`.
/// Returns 500 Internal Server Error if no free code was found or the store failed.
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedUrlData>>), AppError> {
    payload.validate()?;

    let url = state
        .url_service
        .create_short_url(&payload.original_url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedUrlData { url: url.into() })),
    ))
}

/// Lists all active short URLs, newest first.
///
/// # Endpoint
///
/// `GET /urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UrlListData>>, AppError> {
    let urls = state.url_service.list_active().await?;

    Ok(Json(ApiResponse::success(UrlListData {
        urls: urls.into_iter().map(UrlOut::from).collect(),
    })))
}

/// Deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /urls/{code}`
///
/// # Behavior
///
/// The record is deactivated, not removed: it disappears from lookups and
/// listings, and its code is never handed out again.
///
/// # Errors
///
/// Returns 404 Not Found if no active record has this code.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.url_service.delete(&code).await?;

    Ok(Json(ApiResponse::message("URL deleted successfully")))
}
