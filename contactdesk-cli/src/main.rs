//! contactdesk CLI - contact form server and inquiry inspection
//!
//! - `serve`: run the HTTP server (API, form, listing pages)
//! - `list`: print stored inquiries, newest first

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "contactdesk",
    author,
    version,
    about = "Contact form server with an inquiry listing",
    long_about = "Collect name/email/message submissions through a web form or JSON API, \
                  store them in Postgres, and review them in a listing page or from the terminal."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),

    /// Print stored inquiries, newest first
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so env-backed flags see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::List(args) => commands::list::run_list(args).await?,
    }

    Ok(())
}
