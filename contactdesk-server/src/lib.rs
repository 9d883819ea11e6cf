//! contactdesk-server: HTTP server for the contact form
//!
//! Serves the JSON inquiry API, the public contact form and the internal
//! listing pages. Persistence sits behind [`store::InquiryStore`] so the
//! server runs against Postgres or an in-process store.

pub mod config;
pub mod db;
pub mod http;
pub mod pages;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, RuntimeMode};
pub use state::AppState;
pub use store::{InquiryStore, MemoryInquiryStore, PgInquiryStore, Readiness, StoreError};
