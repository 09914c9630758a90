//! HTTP request handlers for the REST API.

mod export;
mod health;
mod instruments;
mod market;

pub use export::export_csv_handler;
pub use health::health_handler;
pub use instruments::instrument_list_handler;
pub use market::top_locations_handler;
