//! Inquiry persistence
//!
//! Records are created and read, never updated or deleted.
//!
//! - postgres: the production store, reached through [`crate::db::Connector`]
//! - memory: process-local store for tests and local demos

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use contactdesk_core::{Inquiry, NewInquiry};
use serde::Serialize;
use uuid::Uuid;

pub use memory::MemoryInquiryStore;
pub use postgres::PgInquiryStore;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Failure of a connection attempt, shared by every caller that waited on it
    #[error(transparent)]
    Connect(Arc<StoreError>),
}

/// Whether the backend has been reached yet. Reading it never connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    Connected,
    Pending,
}

/// Append-only inquiry storage (testable)
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Make sure the backend is reachable before any work is done.
    async fn ready(&self) -> Result<(), StoreError>;

    fn readiness(&self) -> Readiness;

    /// Store a validated inquiry under a fresh id and creation time.
    async fn create(&self, new: NewInquiry) -> Result<Inquiry, StoreError>;

    /// Every stored inquiry, newest first. Rows with equal `created_at`
    /// come back in reverse insertion order.
    async fn list(&self) -> Result<Vec<Inquiry>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Inquiry>, StoreError>;
}
