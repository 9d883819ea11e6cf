//! List stored inquiries from the terminal

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;

use contactdesk_core::display::{list_timestamp, preview, PREVIEW_CHARS};
use contactdesk_core::Inquiry;
use contactdesk_server::db::Connector;
use contactdesk_server::{service, PgInquiryStore};

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Database URL (Postgres connection string)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Output as JSON (same record shape as the API)
    #[arg(long)]
    pub json: bool,

    /// Show at most this many inquiries
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Timezone for timestamps in table output
    #[arg(long, env = "CONTACTDESK_TZ", default_value = "Asia/Tokyo")]
    pub display_tz: Tz,
}

pub async fn run_list(args: ListArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let store = PgInquiryStore::new(Arc::new(Connector::new(database_url)));
    let mut inquiries = service::list(&store)
        .await
        .context("Failed to list inquiries")?;

    if let Some(limit) = args.limit {
        inquiries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&inquiries)?);
    } else {
        print!("{}", render_table(&inquiries, args.display_tz));
    }

    Ok(())
}

fn render_table(inquiries: &[Inquiry], tz: Tz) -> String {
    if inquiries.is_empty() {
        return "No inquiries yet\n".to_string();
    }

    let mut out = String::new();
    for inquiry in inquiries {
        out.push_str(&format!(
            "{}  {}  {} <{}>  {}\n",
            list_timestamp(inquiry.created_at, tz),
            inquiry.id,
            inquiry.name,
            inquiry.email,
            preview(&inquiry.message, PREVIEW_CHARS),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_table(&[], chrono_tz::UTC), "No inquiries yet\n");
    }

    #[test]
    fn one_line_per_inquiry() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let inquiry = Inquiry {
            id: Uuid::nil(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            message: "line one\nline two".into(),
            created_at: at,
            updated_at: at,
        };

        let table = render_table(&[inquiry.clone(), inquiry], chrono_tz::UTC);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("2024/05/01 09:30"));
        assert!(table.contains("Ann <ann@example.com>  line one line two"));
    }
}
