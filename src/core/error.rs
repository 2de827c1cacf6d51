//! 核心错误处理模块

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// 请求级错误类型，每个请求独立返回，不会影响服务进程
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    Conflict(String),
    #[cfg(feature = "database")]
    Database(sqlx::Error),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::Conflict(_) => StatusCode::CONFLICT,
            #[cfg(feature = "database")]
            CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            CoreError::Conflict(msg) => write!(f, "conflict: {}", msg),
            #[cfg(feature = "database")]
            CoreError::Database(e) => write!(f, "database error: {}", e),
            CoreError::InternalServerError(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_kind, user_message) = match self {
            CoreError::BadRequest(msg) => ("BAD_REQUEST", msg),
            CoreError::Conflict(msg) => ("CONFLICT", msg),
            #[cfg(feature = "database")]
            CoreError::Database(e) => {
                // 数据库细节只写日志，不返回给调用方
                error!("Database error: {}", e);
                ("INTERNAL_SERVER_ERROR", "Database error".to_string())
            }
            CoreError::InternalServerError(msg) => {
                error!("Internal error: {}", msg);
                ("INTERNAL_SERVER_ERROR", msg)
            }
        };

        let error_response = ErrorResponse {
            error: error_kind.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Database(err)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::BadRequest(format!("Failed to parse request body: {}", err))
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CoreError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            CoreError::InternalServerError("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_database_error_is_500() {
        let err: CoreError = sqlx::Error::RowNotFound.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let err: CoreError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, CoreError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_response() {
        let response = CoreError::BadRequest("invalid body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
