//! Database layer - lazily connected pool and schema bootstrap
//!
//! The pool is opened on first use, not at startup, so the server comes up
//! even while the database is unreachable and each request reports the
//! failure on its own.

pub mod migrations;
pub mod pool;

pub use pool::Connector;
