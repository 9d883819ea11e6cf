//! `GET /health`: process liveness plus database readiness
//!
//! Reports whether the inquiry store has been reached yet without forcing a
//! connection, so probes never open the pool on their own.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::store::Readiness;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: Readiness,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: state.store().readiness(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::AppConfig;
    use crate::db::Connector;
    use crate::store::{MemoryInquiryStore, PgInquiryStore};

    #[tokio::test]
    async fn memory_store_reports_connected() {
        let state = AppState::new(Arc::new(MemoryInquiryStore::new()), AppConfig::default());

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, Readiness::Connected);
    }

    #[tokio::test]
    async fn unopened_pool_reports_pending_without_connecting() {
        let connector = Arc::new(Connector::new("postgres://nobody@127.0.0.1:1/none"));
        let store = PgInquiryStore::new(connector.clone());
        let state = AppState::new(Arc::new(store), AppConfig::default());

        let Json(body) = health(State(state)).await;
        assert_eq!(body.database, Readiness::Pending);
        assert_eq!(serde_json::to_value(&body).unwrap()["database"], "pending");
        assert!(!connector.is_connected());
    }
}
