//! Instrument catalog entity.

use chrono::{DateTime, Utc};

/// A row from the instruments catalog, shown verbatim on the dashboard's
/// table page.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Instrument {
    /// Ordered column list for table rendering.
    ///
    /// The table page renders exactly these columns in this order, instead of
    /// reflecting over whatever shape a row happens to have.
    pub const COLUMNS: [&'static str; 4] = ["id", "name", "category", "created_at"];

    pub fn new(id: i64, name: String, category: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            category,
            created_at,
        }
    }

    /// Renders the row's cells in [`Self::COLUMNS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            self.created_at.to_rfc3339(),
        ]
    }
}
