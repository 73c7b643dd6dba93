use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use braincache_core::CoreError;
use serde_json::json;

/// Body text shared by authorization rejections, so callers can never tell
/// "exists but private" from "does not exist" through the message.
const ACCESS_DENIED: &str = "you don't have access to this resource";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.status.as_u16(),
                "message": self.message,
            }
        }));
        (self.status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(what) => {
                Self::new(StatusCode::NOT_FOUND, format!("{what} not found"))
            }
            CoreError::Forbidden => Self::new(StatusCode::FORBIDDEN, ACCESS_DENIED),
            CoreError::Conflict(message) => Self::new(StatusCode::CONFLICT, message),
            CoreError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            CoreError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                Self::internal("internal error")
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "API error");
        Self::internal(err.to_string())
    }
}
