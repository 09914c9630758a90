//! Location price aggregation and top-N ranking.
//!
//! This is the computational core of the dashboard: fold raw observations
//! into per-location sums, divide for the mean, rank descending and keep the
//! top entries. Malformed rows are excluded, never reported.

use std::collections::BTreeMap;

use crate::domain::entities::Observation;

/// Number of locations the dashboard ranks.
pub const TOP_LOCATIONS: usize = 10;

/// One location's computed average price and supporting observation count.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationAverage {
    pub location: String,
    pub average_price: f64,
    pub count: i64,
}

/// Headline figures for the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    /// Location holding the highest average price.
    pub top_location: String,
    pub top_average: f64,
    /// Observations backing the ranked rows.
    pub total_count: i64,
    /// Mean of the ranked averages.
    pub mean_of_averages: f64,
}

/// Groups observations by location and computes the arithmetic mean per group.
///
/// Observations with a blank/absent location or an unresolvable price are
/// skipped. The fold goes through an ordered map, so the returned rows are
/// alphabetical by location; combined with the stable sort in [`rank_top`]
/// this makes tie order deterministic.
pub fn aggregate_by_location(observations: &[Observation]) -> Vec<LocationAverage> {
    let mut groups: BTreeMap<&str, (f64, i64)> = BTreeMap::new();

    for obs in observations {
        let Some(location) = obs.valid_location() else {
            continue;
        };
        let Some(price) = obs.resolved_price() else {
            continue;
        };

        let entry = groups.entry(location).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(location, (sum, count))| LocationAverage {
            location: location.to_string(),
            average_price: sum / count as f64,
            count,
        })
        .collect()
}

/// Sorts rows descending by average price and truncates to `limit`.
pub fn rank_top(mut rows: Vec<LocationAverage>, limit: usize) -> Vec<LocationAverage> {
    rows.sort_by(|a, b| b.average_price.total_cmp(&a.average_price));
    rows.truncate(limit);
    rows
}

/// Computes the summary card figures from an already-ranked list.
///
/// Returns `None` for an empty list; the dashboard renders its empty state
/// instead of zeroed cards.
pub fn summarize(ranked: &[LocationAverage]) -> Option<MarketSummary> {
    let top = ranked.first()?;
    let total_count = ranked.iter().map(|r| r.count).sum();
    let mean_of_averages =
        ranked.iter().map(|r| r.average_price).sum::<f64>() / ranked.len() as f64;

    Some(MarketSummary {
        top_location: top.location.clone(),
        top_average: top.average_price,
        total_count,
        mean_of_averages,
    })
}
