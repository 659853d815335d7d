//! API error responder
//!
//! Every handler failure is rendered as the uniform
//! `{"status": "error", "message": "..."}` payload with the status code the
//! domain taxonomy maps to. Nothing escapes as an unhandled fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gembot::DomainError;

use crate::models::ErrorBody;

/// Transport-level error: status code plus user-facing message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Uninitialized => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Generation(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(DomainError::validation("Prompt cannot be empty"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("Prompt cannot be empty"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(DomainError::not_found(5, 2));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains('5'));
    }

    #[test]
    fn test_uninitialized_maps_to_500() {
        let err = ApiError::from(DomainError::Uninitialized);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_generation_failure_maps_to_400() {
        let err = ApiError::from(DomainError::generation("quota exceeded"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("quota exceeded"));
    }
}
