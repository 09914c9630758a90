//! Repository trait for the instruments catalog.

use crate::domain::entities::Instrument;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the instruments table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInstrumentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstrumentRepository: Send + Sync {
    /// Lists every instrument row, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Instrument>, AppError>;
}
