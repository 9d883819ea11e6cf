//! HTTP server command
//!
//! Runs the contactdesk server with the API, form and listing routes.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;

use contactdesk_server::db::Connector;
use contactdesk_server::http::{run_server, ServerConfig};
use contactdesk_server::{
    AppConfig, AppState, InquiryStore, MemoryInquiryStore, PgInquiryStore, RuntimeMode,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CONTACTDESK_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Database URL (Postgres connection string)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Runtime mode; development adds error detail to 500 responses
    #[arg(long, env = "CONTACTDESK_ENV", default_value = "production")]
    pub mode: RuntimeMode,

    /// Timezone for timestamps on the listing pages
    #[arg(long, env = "CONTACTDESK_TZ", default_value = "Asia/Tokyo")]
    pub display_tz: Tz,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Keep inquiries in memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn InquiryStore> = if args.memory {
        tracing::warn!("Using in-memory store - inquiries are lost on exit");
        Arc::new(MemoryInquiryStore::new())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;
        // Connected lazily on the first request that needs it
        let connector = Connector::new(database_url).with_max_connections(args.max_connections);
        Arc::new(PgInquiryStore::new(Arc::new(connector)))
    };

    let config = AppConfig {
        mode: args.mode,
        display_tz: args.display_tz,
    };

    tracing::info!("Starting contactdesk server on {}", args.bind);

    // Run server (blocks until shutdown)
    run_server(AppState::new(store, config), ServerConfig { bind_addr: args.bind })
        .await
        .context("Server error")?;

    Ok(())
}
