//! Schema bootstrap for the inquiries table

use sqlx::PgPool;

/// Create the inquiries table and its listing index if missing.
///
/// `seq` is internal: it breaks ties between rows sharing a `created_at`
/// so listings come back in reverse insertion order.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::debug!("Running inquiry migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inquiries (
            seq BIGSERIAL,
            id UUID PRIMARY KEY,
            name TEXT NOT NULL CHECK (length(name) > 0),
            email TEXT NOT NULL,
            message TEXT NOT NULL CHECK (char_length(message) >= 10),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_inquiries_newest
            ON inquiries (created_at DESC, seq DESC)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
