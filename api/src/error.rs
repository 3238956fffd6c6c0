//! API error mapping

use crate::models::ErrorResponse;
use crate::repository::RepositoryError;
use crate::service::ServiceError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repository(RepositoryError::NotFound(msg)) => ApiError::NotFound(msg),
            ServiceError::QueueEmpty => ApiError::NotFound(ServiceError::QueueEmpty.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_status() {
        let not_found: ApiError =
            ServiceError::Repository(RepositoryError::NotFound("T1".into())).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let empty: ApiError = ServiceError::QueueEmpty.into();
        assert_eq!(empty.status_code(), StatusCode::NOT_FOUND);

        let conflict: ApiError =
            ServiceError::Repository(RepositoryError::Conflict("T1".into())).into();
        assert_eq!(conflict.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let unknown: ApiError = ServiceError::UnknownSkillGroup("VIP".into()).into();
        assert_eq!(unknown.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(unknown.to_string().contains("VIP"));
    }
}
