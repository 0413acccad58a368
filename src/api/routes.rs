//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, list_urls_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Short URL routes.
///
/// # Endpoints
///
/// - `POST   /urls`         - Shorten a URL
/// - `GET    /urls`         - List active short URLs
/// - `DELETE /urls/{code}`  - Delete a short URL
/// - `GET    /u/{code}`     - Redirect to the original URL
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route("/urls/{code}", delete(delete_url_handler))
        .route("/u/{code}", get(redirect_handler))
}
