//! Repository trait for house listing observations.

use crate::domain::entities::Observation;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the house listings table.
///
/// The dashboard needs only the `(location, price)` projection; heavier
/// listing attributes never leave the database.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgListingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Fetches every `(location, price)` observation.
    ///
    /// Rows arrive unfiltered; malformed prices and blank locations are the
    /// aggregator's problem, not the repository's.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_observations(&self) -> Result<Vec<Observation>, AppError>;

    /// Counts rows in the listings table.
    ///
    /// Used by the health check as a cheap connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_observations(&self) -> Result<i64, AppError>;
}
