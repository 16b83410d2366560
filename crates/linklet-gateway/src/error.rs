use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linklet_core::ShortenerError;
use linklet_redirector::RedirectorError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure the HTTP surface can report.
///
/// Each variant maps to a stable `code` string and an HTTP status; the
/// response body is always `{"error": {"code", "message"}}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("A valid http/https url is required")]
    InvalidUrl,
    #[error("shortcode must be 4-30 chars and contain only letters, digits, underscore or hyphen")]
    InvalidShortCode,
    #[error("shortcode already in use")]
    ShortCodeInUse,
    #[error("shortcode not found")]
    NotFound,
    #[error("short link expired")]
    Expired,
    /// The detail is logged, never sent to the client.
    #[error("Internal Server Error")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InvalidUrl => "INVALID_URL",
            AppError::InvalidShortCode => "INVALID_SHORTCODE",
            AppError::ShortCodeInUse => "SHORTCODE_IN_USE",
            AppError::NotFound => "NOT_FOUND",
            AppError::Expired => "EXPIRED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidUrl | AppError::InvalidShortCode => {
                StatusCode::BAD_REQUEST
            }
            AppError::ShortCodeInUse => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        match &self {
            AppError::Internal(detail) => {
                error!(status = status.as_u16(), code, reason = %message, detail = %detail, "error")
            }
            _ => error!(status = status.as_u16(), code, reason = %message, "error"),
        }

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::InvalidUrl(_) => AppError::InvalidUrl,
            ShortenerError::InvalidShortCode(_) => AppError::InvalidShortCode,
            ShortenerError::ShortCodeInUse(_) => AppError::ShortCodeInUse,
            other @ (ShortenerError::GenerationExhausted(_) | ShortenerError::Storage(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl From<RedirectorError> for AppError {
    fn from(value: RedirectorError) -> Self {
        match value {
            RedirectorError::NotFound(_) => AppError::NotFound,
            RedirectorError::Expired(_) => AppError::Expired,
            RedirectorError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        AppError::BadRequest(value.body_text())
    }
}
