//! HTTP server layer
//!
//! Axum server with:
//! - JSON inquiry API under /api
//! - Server-rendered form and listing pages
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
