//! Web dashboard route configuration.

use crate::api::handlers::export_csv_handler;
use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, instruments_handler, login_handler};
use axum::{Router, routing::get};

/// Protected dashboard routes requiring authentication.
///
/// Protected via [`crate::web::middleware::web_auth`] (cookie-based).
///
/// # Endpoints
///
/// - `GET /`            - House price dashboard (charts + summary cards)
/// - `GET /instruments` - Instruments table page
/// - `GET /export.csv`  - CSV download of the ranked list (cookie session,
///   so the dashboard's download button works without a Bearer header)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/instruments", get(instruments_handler))
        .route("/export.csv", get(export_csv_handler))
}

/// Public dashboard routes without authentication.
///
/// # Endpoints
///
/// - `GET /login` - Login page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_handler))
}
