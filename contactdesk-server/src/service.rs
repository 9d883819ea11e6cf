//! Create and list pipelines shared by the JSON API and the HTML pages

use contactdesk_core::{validate, FieldErrors, Inquiry, RawInquiry};

use crate::store::{InquiryStore, StoreError};

/// Why a submission was not stored
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// One or more fields broke the schema
    #[error("validation failed: {0}")]
    Invalid(#[from] FieldErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Acquire the store, validate, then persist one new inquiry.
///
/// Not idempotent: identical submissions create distinct records.
pub async fn submit(store: &dyn InquiryStore, raw: &RawInquiry) -> Result<Inquiry, SubmitError> {
    store.ready().await?;

    let new = validate(raw).inspect_err(|errors| {
        tracing::info!(violations = errors.len(), "Inquiry rejected");
    })?;

    tracing::debug!(
        name = new.name(),
        email = new.email(),
        message = %preview_for_log(new.message()),
        "Storing inquiry"
    );

    let inquiry = store.create(new).await?;
    tracing::info!(id = %inquiry.id, "Inquiry stored");
    Ok(inquiry)
}

/// Every stored inquiry, newest first.
pub async fn list(store: &dyn InquiryStore) -> Result<Vec<Inquiry>, StoreError> {
    store.ready().await?;
    let inquiries = store.list().await?;
    tracing::debug!(count = inquiries.len(), "Listed inquiries");
    Ok(inquiries)
}

// Only a prefix of the message is ever logged
fn preview_for_log(message: &str) -> String {
    let mut prefix: String = message.chars().take(20).collect();
    if message.chars().nth(20).is_some() {
        prefix.push_str("...");
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryInquiryStore;

    #[tokio::test]
    async fn submit_stores_valid_input() {
        let store = MemoryInquiryStore::new();
        let raw = RawInquiry::new("田中太郎", "TEST@Example.com", "これはテストメッセージです");

        let inquiry = submit(&store, &raw).await.unwrap();

        assert_eq!(inquiry.email, "test@example.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn submit_rejects_without_storing() {
        let store = MemoryInquiryStore::new();
        let raw = RawInquiry::new("", "bad", "short");

        let err = submit(&store, &raw).await.unwrap_err();

        match err {
            SubmitError::Invalid(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(store.is_empty().await);
    }

    #[test]
    fn log_preview_truncates() {
        assert_eq!(preview_for_log("short"), "short");
        assert_eq!(preview_for_log(&"x".repeat(25)), format!("{}...", "x".repeat(20)));
    }
}
