//! In-process inquiry store

use async_trait::async_trait;
use chrono::Utc;
use contactdesk_core::{Inquiry, NewInquiry};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{InquiryStore, Readiness, StoreError};

/// Vector-backed store. Contents live as long as the process.
#[derive(Default)]
pub struct MemoryInquiryStore {
    records: RwLock<Vec<Inquiry>>,
}

impl MemoryInquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl InquiryStore for MemoryInquiryStore {
    async fn ready(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn readiness(&self) -> Readiness {
        Readiness::Connected
    }

    async fn create(&self, new: NewInquiry) -> Result<Inquiry, StoreError> {
        let inquiry = new.into_inquiry(Uuid::new_v4(), Utc::now());
        self.records.write().await.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, StoreError> {
        let mut newest_first: Vec<Inquiry> =
            self.records.read().await.iter().rev().cloned().collect();
        // Stable sort keeps reverse insertion order among equal timestamps
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(newest_first)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Inquiry>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|inquiry| inquiry.id == id)
            .cloned())
    }
}
