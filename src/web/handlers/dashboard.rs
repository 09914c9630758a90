//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::market::{self, LocationAverage};
use crate::state::AppState;
use crate::utils::format::{format_currency, truncate_label};

/// Fixed segment palette, cycled by index for pie slices and bars.
pub const SEGMENT_PALETTE: [&str; 10] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#00ff00", "#0088fe", "#00c49f", "#ffbb28",
    "#ff8042", "#8884d8",
];

/// Color for segment `index`, wrapping past the palette end.
pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()]
}

/// Axis labels longer than this are truncated with an ellipsis.
const AXIS_LABEL_CHARS: usize = 14;

/// One bar/slice of the charts, preformatted for the template.
pub struct ChartRow {
    /// Truncated label shown on the axis.
    pub label: String,
    /// Full location name for tooltips and the legend.
    pub location: String,
    pub formatted_average: String,
    pub count: i64,
    pub color: &'static str,
    /// Bar width as a percentage of the highest average.
    pub bar_pct: String,
}

/// Summary card values, already formatted.
pub struct SummaryCards {
    pub top_location: String,
    pub top_average: String,
    pub total_count: i64,
    pub mean_of_averages: String,
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with the ranked location list as a bar
/// chart, a pie chart of the average-price distribution and summary cards.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub rows: Vec<ChartRow>,
    /// CSS `conic-gradient(...)` expression for the pie chart; empty when
    /// there is nothing to plot.
    pub pie_gradient: String,
    pub summary: Option<SummaryCards>,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
///
/// A failed fetch is logged and the page falls back to its "no data" state;
/// the dashboard never surfaces a 500 for a read failure.
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let ranked = match state.market_service.top_locations().await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "failed to load location averages");
            Vec::new()
        }
    };

    let summary = market::summarize(&ranked).map(|s| SummaryCards {
        top_location: s.top_location,
        top_average: format_currency(s.top_average),
        total_count: s.total_count,
        mean_of_averages: format_currency(s.mean_of_averages),
    });

    DashboardTemplate {
        pie_gradient: build_pie_gradient(&ranked),
        rows: build_rows(&ranked),
        summary,
    }
}

fn build_rows(ranked: &[LocationAverage]) -> Vec<ChartRow> {
    let max = ranked.first().map(|r| r.average_price).unwrap_or(0.0);

    ranked
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let pct = if max > 0.0 {
                (row.average_price / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };

            ChartRow {
                label: truncate_label(&row.location, AXIS_LABEL_CHARS),
                location: row.location.clone(),
                formatted_average: format_currency(row.average_price),
                count: row.count,
                color: segment_color(i),
                bar_pct: format!("{pct:.1}"),
            }
        })
        .collect()
}

/// Builds the pie chart gradient, one stop per location sized by its share
/// of the summed averages. Non-positive averages contribute a zero-width
/// slice rather than distorting the circle.
fn build_pie_gradient(ranked: &[LocationAverage]) -> String {
    let total: f64 = ranked.iter().map(|r| r.average_price.max(0.0)).sum();
    if total <= 0.0 {
        return String::new();
    }

    let mut stops = Vec::with_capacity(ranked.len());
    let mut acc = 0.0;
    for (i, row) in ranked.iter().enumerate() {
        let start = acc / total * 100.0;
        acc += row.average_price.max(0.0);
        let end = acc / total * 100.0;
        stops.push(format!("{} {start:.2}% {end:.2}%", segment_color(i)));
    }

    format!("conic-gradient({})", stops.join(", "))
}
