//! Lazily established, process-wide connection pool
//!
//! `Connector::connect` opens the pool on first call and hands the same
//! pool to every later caller. Callers arriving while an attempt is in
//! flight await that attempt and receive its outcome, success or failure.
//! A failed attempt leaves nothing behind, so the next call starts over.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared, TryFutureExt};
use once_cell::sync::OnceCell;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::migrations;
use crate::store::StoreError;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

type Attempt = Shared<BoxFuture<'static, Result<PgPool, Arc<StoreError>>>>;

/// Memoized handle to the inquiry database
pub struct Connector {
    database_url: String,
    max_connections: u32,
    pool: OnceCell<PgPool>,
    in_flight: Mutex<Option<Attempt>>,
}

impl Connector {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            pool: OnceCell::new(),
            in_flight: Mutex::new(None),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Get the pool, opening it if no attempt has succeeded yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the database URL is empty, the connection fails,
    /// or the schema bootstrap fails. The error is not cached.
    pub async fn connect(&self) -> Result<&PgPool, StoreError> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }
        if self.database_url.trim().is_empty() {
            return Err(StoreError::Unavailable("DATABASE_URL is not set".into()));
        }

        let attempt = self.join_or_start();
        let result = match attempt.clone().await {
            Ok(pool) => Ok(self.pool.get_or_init(|| pool)),
            Err(e) => Err(StoreError::Connect(e)),
        };

        // The pool is published before the slot empties, so no caller can
        // slip in between and open a second one.
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
            *slot = None;
        }

        result
    }

    /// True once a connection attempt has succeeded.
    pub fn is_connected(&self) -> bool {
        self.pool.get().is_some()
    }

    fn join_or_start(&self) -> Attempt {
        let mut slot = self.slot();
        if let Some(current) = slot.as_ref() {
            tracing::debug!("Joining in-flight database connection attempt");
            return current.clone();
        }

        let attempt = open(self.database_url.clone(), self.max_connections)
            .map_err(Arc::new)
            .boxed()
            .shared();
        *slot = Some(attempt.clone());
        attempt
    }

    fn slot(&self) -> MutexGuard<'_, Option<Attempt>> {
        // The guarded value is replaced wholesale, so a poisoned lock is still consistent
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn open(database_url: String, max_connections: u32) -> Result<PgPool, StoreError> {
    tracing::info!(max_connections, "Opening database pool");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Database connection failed"))?;

    migrations::run(&pool).await?;
    tracing::info!("Database pool ready");
    Ok(pool)
}
