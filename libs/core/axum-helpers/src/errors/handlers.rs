use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}
