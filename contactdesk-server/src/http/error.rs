//! API error types with IntoResponse
//!
//! Errors are converted to the `{success: false, ...}` JSON envelope with
//! the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contactdesk_core::FieldErrors;
use serde_json::json;

use crate::config::RuntimeMode;

pub const INVALID_INPUT: &str = "入力内容に問題があります";
pub const CREATE_FAILED: &str = "サーバーエラーが発生しました";
pub const LIST_FAILED: &str = "データの取得に失敗しました";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Field validation failed (400)
    Validation(FieldErrors),

    /// Anything else (500, logged). `debug` is only set in development.
    Internal {
        message: &'static str,
        debug: Option<String>,
    },
}

impl ApiError {
    /// Log `err` and wrap it behind a generic `message`, keeping the detail
    /// only when `mode` allows it.
    pub fn internal(message: &'static str, err: &dyn std::fmt::Display, mode: RuntimeMode) -> Self {
        tracing::error!(error = %err, "{}", message);
        Self::Internal {
            message,
            debug: mode.is_development().then(|| err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": INVALID_INPUT,
                    "errors": errors.messages(),
                }),
            ),
            Self::Internal { message, debug } => {
                let mut body = json!({
                    "success": false,
                    "message": message,
                });
                if let Some(debug) = debug {
                    body["debug"] = json!(debug);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(e: FieldErrors) -> Self {
        Self::Validation(e)
    }
}
