//! Housing market aggregation service.

use std::sync::Arc;

use crate::domain::market::{self, LocationAverage, TOP_LOCATIONS};
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

/// Service producing the ranked location list for the dashboard.
///
/// Fetches raw observations from the repository and runs the group-by /
/// average / top-N pass from [`crate::domain::market`]. There is no caching;
/// every call re-reads the table.
pub struct MarketService {
    repository: Arc<dyn ListingRepository>,
}

impl MarketService {
    /// Creates a new market service.
    pub fn new(repository: Arc<dyn ListingRepository>) -> Self {
        Self { repository }
    }

    /// Returns the top locations ranked descending by average price.
    ///
    /// At most [`TOP_LOCATIONS`] entries; fewer when the data holds fewer
    /// distinct valid locations, empty when it holds none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the underlying fetch fails. Rows
    /// with malformed prices or blank locations are dropped silently and
    /// never produce an error.
    pub async fn top_locations(&self) -> Result<Vec<LocationAverage>, AppError> {
        let observations = self.repository.fetch_observations().await?;

        Ok(market::rank_top(
            market::aggregate_by_location(&observations),
            TOP_LOCATIONS,
        ))
    }

    /// Counts rows in the listings table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn observation_count(&self) -> Result<i64, AppError> {
        self.repository.count_observations().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Observation, PriceValue};
    use crate::domain::repositories::MockListingRepository;

    fn obs(location: &str, price: PriceValue) -> Observation {
        Observation::new(Some(location.to_string()), Some(price))
    }

    #[tokio::test]
    async fn test_top_locations_ranks_and_averages() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo.expect_fetch_observations().times(1).returning(|| {
            Ok(vec![
                obs("A", PriceValue::Number(100.0)),
                obs("A", PriceValue::Number(200.0)),
                obs("B", PriceValue::Text("50".to_string())),
                obs("B", PriceValue::Text("n/a".to_string())),
            ])
        });

        let service = MarketService::new(Arc::new(mock_repo));

        let ranked = service.top_locations().await.unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].location, "A");
        assert_eq!(ranked[0].average_price, 150.0);
        assert_eq!(ranked[1].location, "B");
        assert_eq!(ranked[1].average_price, 50.0);
    }

    #[tokio::test]
    async fn test_top_locations_caps_at_limit() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo.expect_fetch_observations().times(1).returning(|| {
            Ok((0..25)
                .map(|i| obs(&format!("loc-{i:02}"), PriceValue::Number(f64::from(i))))
                .collect())
        });

        let service = MarketService::new(Arc::new(mock_repo));

        let ranked = service.top_locations().await.unwrap();

        assert_eq!(ranked.len(), TOP_LOCATIONS);
    }

    #[tokio::test]
    async fn test_empty_table_yields_empty_list() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_fetch_observations()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let service = MarketService::new(Arc::new(mock_repo));

        assert!(service.top_locations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_fetch_observations()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", serde_json::json!({}))));

        let service = MarketService::new(Arc::new(mock_repo));

        let result = service.top_locations().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
