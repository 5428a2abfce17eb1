use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that can be returned from handlers.
///
/// Every variant maps to a fixed business code and HTTP status; the
/// `Display` text is the message sent on the wire.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request errors
    #[error("参数不正确")]
    Parameter,

    #[error("Json格式错误")]
    JsonFormat,

    #[error("text或response为空")]
    EmptyContent,

    // Authentication errors
    #[error("用户名或密码错误")]
    InvalidCredentials,

    #[error("Token验证失败")]
    TokenCheckFailed,

    // Resource errors
    #[error("资源不存在")]
    NotFound(String),

    // Database errors
    #[error("服务器内部错误")]
    Database(String),

    // Internal errors
    #[error("服务器内部错误")]
    Internal(String),
}

impl AppError {
    /// Business error code carried in the response body
    pub fn code(&self) -> u32 {
        match self {
            AppError::Parameter => 10000001,
            AppError::JsonFormat => 10000041,
            AppError::InvalidCredentials => 10000042,
            AppError::NotFound(_) => 10000043,
            AppError::TokenCheckFailed => 10000044,
            AppError::EmptyContent => 10000045,
            AppError::Database(_) | AppError::Internal(_) => 999,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Parameter | AppError::JsonFormat | AppError::EmptyContent => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidCredentials | AppError::TokenCheckFailed => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u32,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(msg) => tracing::error!("Database error: {}", msg),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::NotFound(resource) => tracing::debug!("{} not found", resource),
            other => tracing::debug!(code = other.code(), "Request rejected: {}", other),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: self.code(),
        });

        (self.status(), body).into_response()
    }
}

// Convenient conversions from common error types

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(resource) => AppError::NotFound(resource),
            sea_orm::DbErr::RecordNotUpdated => AppError::NotFound("Record".to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!("Token rejected: {:?}", err.kind());
        AppError::TokenCheckFailed
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_statuses() {
        assert_eq!(AppError::Parameter.code(), 10000001);
        assert_eq!(AppError::Parameter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::JsonFormat.code(), 10000041);
        assert_eq!(AppError::TokenCheckFailed.code(), 10000044);
        assert_eq!(AppError::TokenCheckFailed.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::EmptyContent.code(), 10000045);
        assert_eq!(
            AppError::NotFound("Rule".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = AppError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "服务器内部错误");
        assert_eq!(err.code(), 999);
    }
}
