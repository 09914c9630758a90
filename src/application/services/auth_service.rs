//! Authentication service for dashboard token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::DashboardToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::codegen;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service authenticating dashboard and API requests via access tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw token against stored credentials.
    ///
    /// On successful authentication, updates the `last_used_at` timestamp for
    /// monitoring and audit purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token hash does not match
    /// any active credentials or the token has been revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(token);

        let is_valid = self.repository.validate_token(&token_hash).await?;

        if !is_valid {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        }

        let _ = self.repository.update_last_used(&token_hash).await;

        Ok(())
    }

    /// Creates and stores a named token, returning the record and the raw
    /// value.
    ///
    /// The raw value is generated unless one is supplied, and is never
    /// persisted; callers must surface it to the operator immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_token(
        &self,
        name: &str,
        raw_token: Option<String>,
    ) -> Result<(DashboardToken, String), AppError> {
        let raw = raw_token.unwrap_or_else(codegen::generate_token);
        let hash = self.hash_token(&raw);

        let record = self.repository.insert_token(name, &hash).await?;

        Ok((record, raw))
    }
}
