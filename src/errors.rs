use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// A lightweight wrapper for request-scoped errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), "{}", self.message);
        } else {
            tracing::warn!(status = self.status.as_u16(), "{}", self.message);
        }

        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

/// The request carried no usable multipart framing (wrong or missing
/// `Content-Type`, no boundary).
impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        let status = rejection.status();
        let status = if status.is_client_error() {
            status
        } else {
            StatusCode::BAD_REQUEST
        };
        AppError::new(
            status,
            format!("invalid multipart upload: {}", rejection.body_text()),
        )
    }
}

/// The framing was present but a part could not be decoded, or the body
/// ran past the upload limit.
impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        match status {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::new(
                status,
                format!("upload exceeds the size limit: {}", err.body_text()),
            ),
            s if s.is_client_error() => AppError::new(
                s,
                format!("malformed multipart body: {}", err.body_text()),
            ),
            _ => AppError::bad_request(format!("malformed multipart body: {}", err.body_text())),
        }
    }
}
