//! Handler for the CSV export download.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::csv_export::{EXPORT_FILENAME, write_top_locations_csv};

/// Serves the ranked location list as a CSV download.
///
/// # Endpoint
///
/// `GET /api/market/top-locations/export`
///
/// # Response
///
/// `text/csv` body with `Content-Disposition: attachment` and the fixed
/// filename `house_top10.csv`. An empty ranked list answers `204 No Content`
/// with no attachment headers; the browser downloads nothing.
///
/// # Errors
///
/// Returns 500 Internal Server Error when the database read or CSV encoding
/// fails.
pub async fn export_csv_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let ranked = state.market_service.top_locations().await?;

    if ranked.is_empty() {
        tracing::debug!("export requested with no data, skipping download");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body = write_top_locations_csv(&ranked).map_err(|e| {
        AppError::internal("Failed to build CSV export", json!({"error": e.to_string()}))
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        ),
    ];

    Ok((headers, body).into_response())
}
