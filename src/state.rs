use std::sync::Arc;

use crate::application::services::{AuthService, InstrumentService, MarketService};

/// Shared application state injected into every handler.
///
/// Holds the service layer only; repositories and the pool stay behind the
/// services. Cloning is cheap (all members are `Arc`s).
#[derive(Clone)]
pub struct AppState {
    pub market_service: Arc<MarketService>,
    pub instrument_service: Arc<InstrumentService>,
    pub auth_service: Arc<AuthService>,
}
