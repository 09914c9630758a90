//! Handler for the ranked location list.

use axum::{Json, extract::State};

use crate::api::dto::market::{LocationAverageItem, TopLocationsResponse};
use crate::domain::market;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the top locations ranked by average house price.
///
/// # Endpoint
///
/// `GET /api/market/top-locations`
///
/// # Response
///
/// Ranked list (at most 10 entries, descending by average) plus summary
/// figures. An empty table yields an empty list and a null summary, not an
/// error.
///
/// # Errors
///
/// Returns 500 Internal Server Error when the database read fails.
pub async fn top_locations_handler(
    State(state): State<AppState>,
) -> Result<Json<TopLocationsResponse>, AppError> {
    let ranked = state.market_service.top_locations().await?;

    let summary = market::summarize(&ranked).map(Into::into);
    let items: Vec<LocationAverageItem> = ranked.into_iter().map(Into::into).collect();

    Ok(Json(TopLocationsResponse { items, summary }))
}
