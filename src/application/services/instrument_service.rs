//! Instrument catalog service.

use std::sync::Arc;

use crate::domain::entities::Instrument;
use crate::domain::repositories::InstrumentRepository;
use crate::error::AppError;

/// Service for reading the instruments catalog.
pub struct InstrumentService {
    repository: Arc<dyn InstrumentRepository>,
}

impl InstrumentService {
    /// Creates a new instrument service.
    pub fn new(repository: Arc<dyn InstrumentRepository>) -> Self {
        Self { repository }
    }

    /// Lists every instrument row.
    ///
    /// An empty catalog is not an error; the table page renders its
    /// "no data" state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>, AppError> {
        self.repository.list_all().await
    }
}
