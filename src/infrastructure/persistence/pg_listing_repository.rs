//! PostgreSQL implementation of the listing repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Observation, PriceValue};
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

/// PostgreSQL repository for house listing observations.
///
/// The `price` column is `TEXT`: the table was bulk-imported from
/// spreadsheets and carries values like `"₹1,00,000"` alongside plain
/// numbers. Coercion happens in [`PriceValue`], not in SQL.
pub struct PgListingRepository {
    pool: Arc<PgPool>,
}

impl PgListingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ObservationRow {
    location: Option<String>,
    price: Option<String>,
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn fetch_observations(&self) -> Result<Vec<Observation>, AppError> {
        let rows: Vec<ObservationRow> =
            sqlx::query_as("SELECT location, price FROM house_listings")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|r| Observation::new(r.location, r.price.map(PriceValue::Text)))
            .collect())
    }

    async fn count_observations(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM house_listings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
