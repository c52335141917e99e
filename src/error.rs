use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API callers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Missing or malformed client input
    #[error("{0}")]
    InvalidRequest(String),

    /// Well-formed input referring to data the table does not hold
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::InvalidRequest(msg) | AppError::NotFound(msg) => msg,
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid listen address {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display_is_bare_message() {
        let err = AppError::NotFound("Date 2020-01-01 not found in database.".into());
        assert_eq!(err.to_string(), "Date 2020-01-01 not found in database.");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidAddress {
            value: "nope".into(),
            reason: "invalid port".into(),
        };
        assert!(err.to_string().contains("nope"));
    }
}
