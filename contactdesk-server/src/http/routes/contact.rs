//! Inquiry API
//!
//! - `POST /api/contact`: validate and store one inquiry
//! - `GET /api/contact`: every inquiry, newest first
//!
//! The body is taken as raw bytes and decoded here, so malformed JSON is a
//! server error like any other non-validation failure rather than an
//! extractor rejection.

use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use contactdesk_core::{Inquiry, RawInquiry};
use serde::Serialize;
use serde_json::Value;

use crate::http::error::{ApiError, CREATE_FAILED, LIST_FAILED};
use crate::service::{self, SubmitError};
use crate::state::AppState;

pub const CREATED: &str = "お問い合わせを受け付けました";

/// Create response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Inquiry,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Inquiry>,
}

/// Request body could not be read as a submission
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,
}

fn decode_submission(body: &[u8]) -> Result<RawInquiry, BodyError> {
    let value: Value = serde_json::from_slice(body)?;
    RawInquiry::from_json(&value).ok_or(BodyError::NotAnObject)
}

/// POST /api/contact - store a new inquiry
async fn create_inquiry(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatedResponse>, ApiError> {
    tracing::info!("Received contact form submission");
    let mode = state.config().mode;

    // Store first, body second: an outage is reported ahead of a bad body
    state
        .store()
        .ready()
        .await
        .map_err(|e| ApiError::internal(CREATE_FAILED, &e, mode))?;

    let raw = decode_submission(&body).map_err(|e| ApiError::internal(CREATE_FAILED, &e, mode))?;

    let inquiry = service::submit(state.store(), &raw)
        .await
        .map_err(|e| match e {
            SubmitError::Invalid(errors) => ApiError::Validation(errors),
            SubmitError::Store(e) => ApiError::internal(CREATE_FAILED, &e, mode),
        })?;

    Ok(Json(CreatedResponse {
        success: true,
        message: CREATED,
        data: inquiry,
    }))
}

/// GET /api/contact - list inquiries, newest first
async fn list_inquiries(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
    let inquiries = service::list(state.store())
        .await
        .map_err(|e| ApiError::internal(LIST_FAILED, &e, state.config().mode))?;

    Ok(Json(ListResponse {
        success: true,
        data: inquiries,
    }))
}

/// Inquiry API routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", get(list_inquiries).post(create_inquiry))
}
