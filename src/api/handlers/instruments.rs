//! Handler for the instruments catalog listing.

use axum::{Json, extract::State};

use crate::api::dto::instruments::{InstrumentItem, InstrumentListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the instruments catalog.
///
/// # Endpoint
///
/// `GET /api/instruments`
///
/// # Errors
///
/// Returns 500 Internal Server Error when the database read fails.
pub async fn instrument_list_handler(
    State(state): State<AppState>,
) -> Result<Json<InstrumentListResponse>, AppError> {
    let items: Vec<InstrumentItem> = state
        .instrument_service
        .list_instruments()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(InstrumentListResponse { items }))
}
