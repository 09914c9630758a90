//! Instruments table page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Instrument;
use crate::state::AppState;

/// Template for the instruments table page.
///
/// Renders `templates/instruments.html` with the declared column list and
/// one row of cells per instrument. Shows "No data found" when the catalog
/// is empty.
#[derive(Template, WebTemplate)]
#[template(path = "instruments.html")]
pub struct InstrumentsTemplate {
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// Renders the instruments table page.
///
/// # Endpoint
///
/// `GET /instruments`
///
/// A failed fetch is logged and rendered as the empty state, same as the
/// dashboard page.
pub async fn instruments_handler(State(state): State<AppState>) -> impl IntoResponse {
    let rows = match state.instrument_service.list_instruments().await {
        Ok(list) => list.iter().map(|i| i.cells().to_vec()).collect(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load instruments");
            Vec::new()
        }
    };

    InstrumentsTemplate {
        columns: &Instrument::COLUMNS,
        rows,
    }
}
