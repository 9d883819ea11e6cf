//! Application state shared across handlers

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::InquiryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn InquiryStore>,
    config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn InquiryStore>, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, config }),
        }
    }

    pub fn store(&self) -> &dyn InquiryStore {
        self.inner.store.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
