#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use housing_dashboard::application::services::{AuthService, InstrumentService, MarketService};
use housing_dashboard::domain::entities::{DashboardToken, Instrument, Observation};
use housing_dashboard::domain::repositories::{
    InstrumentRepository, ListingRepository, TokenRepository,
};
use housing_dashboard::error::AppError;
use housing_dashboard::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TOKEN: &str = "test-token";

/// In-memory listing repository; serves a fixed observation set or fails
/// every call.
pub struct FakeListingRepository {
    observations: Vec<Observation>,
    fail: bool,
}

impl FakeListingRepository {
    pub fn with_observations(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            observations: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ListingRepository for FakeListingRepository {
    async fn fetch_observations(&self) -> Result<Vec<Observation>, AppError> {
        if self.fail {
            return Err(AppError::internal("Database error", serde_json::json!({})));
        }
        Ok(self.observations.clone())
    }

    async fn count_observations(&self) -> Result<i64, AppError> {
        if self.fail {
            return Err(AppError::internal("Database error", serde_json::json!({})));
        }
        Ok(self.observations.len() as i64)
    }
}

/// In-memory instrument repository.
pub struct FakeInstrumentRepository {
    rows: Vec<Instrument>,
}

impl FakeInstrumentRepository {
    pub fn new(rows: Vec<Instrument>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl InstrumentRepository for FakeInstrumentRepository {
    async fn list_all(&self) -> Result<Vec<Instrument>, AppError> {
        Ok(self.rows.clone())
    }
}

/// In-memory token repository holding a set of valid token hashes.
pub struct FakeTokenRepository {
    valid_hashes: Vec<String>,
}

#[async_trait]
impl TokenRepository for FakeTokenRepository {
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        Ok(self.valid_hashes.iter().any(|h| h == token_hash))
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_token(&self, name: &str, token_hash: &str) -> Result<DashboardToken, AppError> {
        Ok(DashboardToken {
            id: 1,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: chrono::Utc::now(),
            last_used_at: None,
            revoked_at: None,
        })
    }

    async fn list_tokens(&self) -> Result<Vec<DashboardToken>, AppError> {
        Ok(Vec::new())
    }

    async fn revoke_token(&self, _name: &str) -> Result<bool, AppError> {
        Ok(false)
    }
}

fn hash_token(secret: &str, token: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Token repository accepting exactly the given raw tokens under
/// [`TEST_SECRET`].
pub fn token_repo_with(valid_tokens: &[&str]) -> FakeTokenRepository {
    FakeTokenRepository {
        valid_hashes: valid_tokens
            .iter()
            .map(|t| hash_token(TEST_SECRET, t))
            .collect(),
    }
}

/// Builds an [`AppState`] over in-memory repositories.
///
/// The auth service accepts [`TEST_TOKEN`].
pub fn create_test_state(observations: Vec<Observation>, instruments: Vec<Instrument>) -> AppState {
    state_with_listing_repo(FakeListingRepository::with_observations(observations), instruments)
}

/// Same as [`create_test_state`] but with a custom listing repository, for
/// failure injection.
pub fn state_with_listing_repo(
    listing_repo: FakeListingRepository,
    instruments: Vec<Instrument>,
) -> AppState {
    AppState {
        market_service: Arc::new(MarketService::new(Arc::new(listing_repo))),
        instrument_service: Arc::new(InstrumentService::new(Arc::new(
            FakeInstrumentRepository::new(instruments),
        ))),
        auth_service: Arc::new(AuthService::new(
            Arc::new(token_repo_with(&[TEST_TOKEN])),
            TEST_SECRET.to_string(),
        )),
    }
}
