use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("Database not configured")]
    Unavailable,

    /// Store failure with an already truncated diagnostic.
    #[error("{0}")]
    Store(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => ProductError::Unavailable,
            StoreError::Fault(msg) => ProductError::Store(msg),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Unavailable => AppError::DatabaseUnavailable(err.to_string()),
            ProductError::Store(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_store_errors_convert() {
        assert_eq!(
            ProductError::from(StoreError::Unavailable),
            ProductError::Unavailable
        );
        assert_eq!(
            ProductError::from(StoreError::Fault("timed out".into())),
            ProductError::Store("timed out".into())
        );
    }

    #[test]
    fn test_every_product_error_is_500() {
        for err in [ProductError::Unavailable, ProductError::Store("boom".into())] {
            assert_eq!(
                err.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
