//! DTOs for the instruments catalog.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Instrument;

/// Instrument catalog listing.
#[derive(Debug, Serialize)]
pub struct InstrumentListResponse {
    pub items: Vec<InstrumentItem>,
}

/// One catalog row.
#[derive(Debug, Serialize)]
pub struct InstrumentItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<Instrument> for InstrumentItem {
    fn from(row: Instrument) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            created_at: row.created_at,
        }
    }
}
