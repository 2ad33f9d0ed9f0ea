//! Schema bootstrap: create the developers table if it is missing.

use crate::error::AppError;
use crate::store::DEVELOPERS_TABLE;
use sqlx::PgPool;

fn developers_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT,
            "photoUrl" TEXT,
            "twitterUrl" TEXT,
            projects JSONB
        )
        "#,
        DEVELOPERS_TABLE
    )
}

/// Create the developers table if absent. Existing tables are left untouched.
/// The database itself must already exist.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&developers_ddl()).execute(pool).await?;
    tracing::info!(table = DEVELOPERS_TABLE, "schema ready");
    Ok(())
}
