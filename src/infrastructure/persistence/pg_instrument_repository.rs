//! PostgreSQL implementation of the instrument repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Instrument;
use crate::domain::repositories::InstrumentRepository;
use crate::error::AppError;

/// PostgreSQL repository for the instruments catalog.
pub struct PgInstrumentRepository {
    pool: Arc<PgPool>,
}

impl PgInstrumentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InstrumentRow {
    id: i64,
    name: String,
    category: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl InstrumentRepository for PgInstrumentRepository {
    async fn list_all(&self) -> Result<Vec<Instrument>, AppError> {
        let rows: Vec<InstrumentRow> =
            sqlx::query_as("SELECT id, name, category, created_at FROM instruments ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|r| Instrument::new(r.id, r.name, r.category, r.created_at))
            .collect())
    }
}
