//! Postgres inquiry store
//!
//! Each operation goes through the connector, so the pool is opened by
//! whichever request needs it first.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contactdesk_core::{Inquiry, NewInquiry};
use sqlx::FromRow;
use uuid::Uuid;

use super::{InquiryStore, Readiness, StoreError};
use crate::db::Connector;

/// Inquiry row from database
#[derive(Debug, Clone, FromRow)]
struct InquiryRow {
    id: Uuid,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Inquiry repository
pub struct PgInquiryStore {
    connector: Arc<Connector>,
}

impl PgInquiryStore {
    pub fn new(connector: Arc<Connector>) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl InquiryStore for PgInquiryStore {
    async fn ready(&self) -> Result<(), StoreError> {
        self.connector.connect().await.map(|_| ())
    }

    fn readiness(&self) -> Readiness {
        if self.connector.is_connected() {
            Readiness::Connected
        } else {
            Readiness::Pending
        }
    }

    async fn create(&self, new: NewInquiry) -> Result<Inquiry, StoreError> {
        let pool = self.connector.connect().await?;
        let now = Utc::now();

        let row: InquiryRow = sqlx::query_as(
            r#"
            INSERT INTO inquiries (id, name, email, message, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, name, email, message, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.name())
        .bind(new.email())
        .bind(new.message())
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Inquiry>, StoreError> {
        let pool = self.connector.connect().await?;

        let rows: Vec<InquiryRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, message, created_at, updated_at
            FROM inquiries
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Inquiry::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Inquiry>, StoreError> {
        let pool = self.connector.connect().await?;

        let row: Option<InquiryRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, message, created_at, updated_at
            FROM inquiries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(Inquiry::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactdesk_core::{validate, RawInquiry};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p contactdesk-server -- --ignored

    fn store() -> PgInquiryStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgInquiryStore::new(Arc::new(Connector::new(url)))
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let store = store();
        let new = validate(&RawInquiry::new("田中太郎", "TEST@Example.com", "これはテストメッセージです"))
            .unwrap();

        let created = store.create(new).await.expect("create failed");
        assert_eq!(created.email, "test@example.com");

        let fetched = store.get(created.id).await.expect("get failed");
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let store = store();
        let mut ids = Vec::new();
        for n in 0..3 {
            let new = validate(&RawInquiry::new(
                format!("order-{n}"),
                "order@example.com",
                "ordering check message",
            ))
            .unwrap();
            ids.push(store.create(new).await.expect("create failed").id);
        }

        let listed: Vec<Uuid> = store
            .list()
            .await
            .expect("list failed")
            .into_iter()
            .map(|i| i.id)
            .filter(|id| ids.contains(id))
            .collect();

        ids.reverse();
        assert_eq!(listed, ids);
    }
}
