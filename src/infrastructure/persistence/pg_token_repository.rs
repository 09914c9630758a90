//! PostgreSQL implementation of the token repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DashboardToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

/// PostgreSQL repository for dashboard access tokens.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    id: i64,
    name: String,
    token_hash: String,
    created_at: DateTime<Utc>,
    last_used_at: Option<DateTime<Utc>>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<TokenRow> for DashboardToken {
    fn from(row: TokenRow) -> Self {
        DashboardToken {
            id: row.id,
            name: row.name,
            token_hash: row.token_hash,
            created_at: row.created_at,
            last_used_at: row.last_used_at,
            revoked_at: row.revoked_at,
        }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM dashboard_tokens WHERE token_hash = $1 AND revoked_at IS NULL)",
        )
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE dashboard_tokens SET last_used_at = NOW() WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn insert_token(&self, name: &str, token_hash: &str) -> Result<DashboardToken, AppError> {
        let row: TokenRow = sqlx::query_as(
            r#"
            INSERT INTO dashboard_tokens (name, token_hash)
            VALUES ($1, $2)
            RETURNING id, name, token_hash, created_at, last_used_at, revoked_at
            "#,
        )
        .bind(name)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_tokens(&self) -> Result<Vec<DashboardToken>, AppError> {
        let rows: Vec<TokenRow> = sqlx::query_as(
            r#"
            SELECT id, name, token_hash, created_at, last_used_at, revoked_at
            FROM dashboard_tokens
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn revoke_token(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE dashboard_tokens SET revoked_at = NOW() WHERE name = $1 AND revoked_at IS NULL",
        )
        .bind(name)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
