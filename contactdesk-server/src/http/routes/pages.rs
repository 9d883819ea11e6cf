//! HTML page routes
//!
//! - `GET /`: landing page
//! - `GET /contact`, `POST /contact`: the contact form
//! - `GET /inquiries`, `GET /inquiries/{id}`: listing and detail

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use contactdesk_core::RawInquiry;
use uuid::Uuid;

use crate::http::error::LIST_FAILED;
use crate::pages::form::{FormValues, FormView, SUBMIT_FAILED};
use crate::pages::{self, listing, Notice};
use crate::service::{self, SubmitError};
use crate::state::AppState;

type Page = (StatusCode, Html<String>);

/// GET /
async fn home() -> Html<String> {
    Html(pages::home())
}

/// GET /contact - empty form
async fn contact_form() -> Html<String> {
    Html(pages::form::render(&FormView::default()))
}

/// POST /contact - submit through the same pipeline as the API
async fn submit_contact_form(
    State(state): State<AppState>,
    form: Result<Form<FormValues>, FormRejection>,
) -> Page {
    let values = match form {
        Ok(Form(values)) => values,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Unreadable form submission");
            let view = FormView::failed(FormValues::default(), SUBMIT_FAILED);
            return (rejection.status(), Html(pages::form::render(&view)));
        }
    };

    let raw = RawInquiry::new(
        values.name.as_str(),
        values.email.as_str(),
        values.message.as_str(),
    );

    let (status, view) = match service::submit(state.store(), &raw).await {
        Ok(_) => (StatusCode::OK, FormView::submitted()),
        Err(SubmitError::Invalid(errors)) => {
            (StatusCode::BAD_REQUEST, FormView::invalid(values, errors))
        }
        Err(SubmitError::Store(e)) => {
            tracing::error!(error = %e, "Form submission failed");
            let description = if state.config().mode.is_development() {
                format!("{SUBMIT_FAILED} ({e})")
            } else {
                SUBMIT_FAILED.to_owned()
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                FormView::failed(values, description),
            )
        }
    };

    (status, Html(pages::form::render(&view)))
}

/// GET /inquiries - table of every inquiry
async fn inquiry_list(State(state): State<AppState>) -> Page {
    let tz = state.config().display_tz;
    match service::list(state.store()).await {
        Ok(inquiries) => (StatusCode::OK, Html(listing::render_list(&inquiries, None, tz))),
        Err(e) => {
            tracing::error!(error = %e, "Listing page failed");
            let notice = Notice::error(LIST_FAILED);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(listing::render_list(&[], Some(&notice), tz)),
            )
        }
    }
}

/// GET /inquiries/{id} - one inquiry in full
async fn inquiry_detail(State(state): State<AppState>, Path(id): Path<String>) -> Page {
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };

    match state.store().get(id).await {
        Ok(Some(inquiry)) => (
            StatusCode::OK,
            Html(listing::render_detail(&inquiry, state.config().display_tz)),
        ),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, %id, "Detail page failed");
            let notice = Notice::error(LIST_FAILED);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::layout("お問い合わせ詳細", Some(&notice), "")),
            )
        }
    }
}

fn not_found() -> Page {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found("指定されたお問い合わせは存在しません。")),
    )
}

/// Page routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/contact", get(contact_form).post(submit_contact_form))
        .route("/inquiries", get(inquiry_list))
        .route("/inquiries/{id}", get(inquiry_detail))
}
