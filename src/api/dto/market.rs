//! DTOs for the ranked location list.

use serde::Serialize;

use crate::domain::market::{LocationAverage, MarketSummary};

/// Ranked location list with headline figures.
#[derive(Debug, Serialize)]
pub struct TopLocationsResponse {
    pub items: Vec<LocationAverageItem>,
    /// Absent when there is no data to summarize.
    pub summary: Option<MarketSummaryInfo>,
}

/// One location's average price and observation count.
#[derive(Debug, Serialize)]
pub struct LocationAverageItem {
    pub location: String,
    pub average_price: f64,
    pub count: i64,
}

impl From<LocationAverage> for LocationAverageItem {
    fn from(row: LocationAverage) -> Self {
        Self {
            location: row.location,
            average_price: row.average_price,
            count: row.count,
        }
    }
}

/// Headline figures across the ranked rows.
#[derive(Debug, Serialize)]
pub struct MarketSummaryInfo {
    pub top_location: String,
    pub top_average: f64,
    pub total_count: i64,
    pub mean_of_averages: f64,
}

impl From<MarketSummary> for MarketSummaryInfo {
    fn from(summary: MarketSummary) -> Self {
        Self {
            top_location: summary.top_location,
            top_average: summary.top_average,
            total_count: summary.total_count,
            mean_of_averages: summary.mean_of_averages,
        }
    }
}
