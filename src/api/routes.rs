//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{export_csv_handler, instrument_list_handler, top_locations_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET /market/top-locations`        - Ranked location averages + summary
/// - `GET /market/top-locations/export` - Same list as a CSV download
/// - `GET /instruments`                 - Instruments catalog rows
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/market/top-locations", get(top_locations_handler))
        .route("/market/top-locations/export", get(export_csv_handler))
        .route("/instruments", get(instrument_list_handler))
}
