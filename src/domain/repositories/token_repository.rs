//! Repository trait for dashboard access tokens.

use crate::domain::entities::DashboardToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for token storage and validation.
///
/// Tokens are stored hashed; every method operates on the HMAC-SHA256 hex
/// digest, never the raw token value.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Returns whether a non-revoked token with this hash exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Updates the `last_used_at` timestamp for audit purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Stores a new named token hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_token(&self, name: &str, token_hash: &str) -> Result<DashboardToken, AppError>;

    /// Lists all tokens, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_tokens(&self) -> Result<Vec<DashboardToken>, AppError>;

    /// Marks the named token as revoked.
    ///
    /// Returns `false` when no active token matched the name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_token(&self, name: &str) -> Result<bool, AppError>;
}
