use crate::views;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Errors a handler can answer with.
///
/// Rendered as HTML error pages rather than JSON, since every route here serves
/// a browser.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// The page needs an identity and the request carried none.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self);

        let (status, title, message) = match &self {
            BlogError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "Unauthorized", msg),
            BlogError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg),
        };

        (status, views::error_page(title, message)).into_response()
    }
}
