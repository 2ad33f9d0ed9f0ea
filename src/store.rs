//! Developer persistence. `DeveloperStore` is the seam the service talks to; `PgDeveloperStore` is the PostgreSQL backend.

use crate::error::AppError;
use crate::model::{Developer, DeveloperPayload, Project};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

/// Table holding developer rows. `projects` is a JSONB array of `{name, url}`.
pub const DEVELOPERS_TABLE: &str = "developers";

#[async_trait]
pub trait DeveloperStore: Send + Sync {
    /// All rows, in whatever order the backend returns them.
    async fn list(&self) -> Result<Vec<Developer>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Developer>, AppError>;

    /// Insert one row and return the id the backend assigned.
    async fn insert(&self, payload: &DeveloperPayload) -> Result<i32, AppError>;

    /// Overwrite every non-id column of row `id`. Returns rows affected (0 when `id` is absent).
    async fn replace(&self, id: i32, payload: &DeveloperPayload) -> Result<u64, AppError>;

    /// Returns rows affected (0 when `id` is absent).
    async fn delete(&self, id: i32) -> Result<u64, AppError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(sqlx::FromRow)]
struct DeveloperRow {
    id: i32,
    name: Option<String>,
    #[sqlx(rename = "photoUrl")]
    photo_url: Option<String>,
    #[sqlx(rename = "twitterUrl")]
    twitter_url: Option<String>,
    projects: Option<Json<Vec<Project>>>,
}

impl From<DeveloperRow> for Developer {
    fn from(row: DeveloperRow) -> Self {
        Developer {
            id: row.id,
            name: row.name.unwrap_or_default(),
            photo_url: row.photo_url.unwrap_or_default(),
            twitter_url: row.twitter_url.unwrap_or_default(),
            projects: row.projects.map(|p| p.0).unwrap_or_default(),
        }
    }
}

#[derive(Clone)]
pub struct PgDeveloperStore {
    pool: PgPool,
}

impl PgDeveloperStore {
    pub fn new(pool: PgPool) -> Self {
        PgDeveloperStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DeveloperStore for PgDeveloperStore {
    async fn list(&self) -> Result<Vec<Developer>, AppError> {
        let sql = format!(
            r#"SELECT id, name, "photoUrl", "twitterUrl", projects FROM {}"#,
            DEVELOPERS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<DeveloperRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Developer::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Developer>, AppError> {
        let sql = format!(
            r#"SELECT id, name, "photoUrl", "twitterUrl", projects FROM {} WHERE id = $1"#,
            DEVELOPERS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<DeveloperRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Developer::from))
    }

    async fn insert(&self, payload: &DeveloperPayload) -> Result<i32, AppError> {
        let sql = format!(
            r#"INSERT INTO {} (name, "photoUrl", "twitterUrl", projects) VALUES ($1, $2, $3, $4) RETURNING id"#,
            DEVELOPERS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let (id,): (i32,) = sqlx::query_as(&sql)
            .bind(&payload.name)
            .bind(&payload.photo_url)
            .bind(&payload.twitter_url)
            .bind(Json(&payload.projects))
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn replace(&self, id: i32, payload: &DeveloperPayload) -> Result<u64, AppError> {
        let sql = format!(
            r#"UPDATE {} SET name = $1, "photoUrl" = $2, "twitterUrl" = $3, projects = $4 WHERE id = $5"#,
            DEVELOPERS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql)
            .bind(&payload.name)
            .bind(&payload.photo_url)
            .bind(&payload.twitter_url)
            .bind(Json(&payload.projects))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", DEVELOPERS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
