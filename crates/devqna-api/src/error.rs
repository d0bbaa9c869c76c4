use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] devqna_core::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Response status, derived from the upstream failure where there is one.
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(error) => match error {
                devqna_core::Error::Api { status, .. } => StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                devqna_core::Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                devqna_core::Error::Http(_) => StatusCode::BAD_GATEWAY,
                devqna_core::Error::NotFound(_) => StatusCode::NOT_FOUND,
                devqna_core::Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
                devqna_core::Error::Serialization(_) | devqna_core::Error::SecureStorage(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_api_status_passes_through() {
        let error = AppError::from(devqna_core::Error::Api {
            status: 403,
            message: "forbidden".to_string(),
        });
        assert_eq!(error.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn timeout_maps_to_gateway_timeout() {
        let error = AppError::from(devqna_core::Error::Timeout(
            std::time::Duration::from_secs(5),
        ));
        assert_eq!(error.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn missing_target_maps_to_not_found() {
        let error = AppError::from(devqna_core::Error::NotFound("question q1".to_string()));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_api_status_falls_back_to_bad_gateway() {
        let error = AppError::from(devqna_core::Error::Api {
            status: 42,
            message: "weird".to_string(),
        });
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    }
}
