//! Core domain entities.

mod instrument;
mod observation;
mod token;

pub use instrument::Instrument;
pub use observation::{Observation, PriceValue};
pub use token::DashboardToken;
