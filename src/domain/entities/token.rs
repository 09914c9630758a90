//! Dashboard access token entity.

use chrono::{DateTime, Utc};

/// A named access token for the dashboard and API.
///
/// Only the HMAC-SHA256 hash of the token value is stored; the raw value is
/// shown once at creation time by the admin tool.
#[derive(Debug, Clone)]
pub struct DashboardToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl DashboardToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revocation_flag() {
        let mut token = DashboardToken {
            id: 1,
            name: "ops".to_string(),
            token_hash: "ab".repeat(32),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };

        assert!(!token.is_revoked());

        token.revoked_at = Some(Utc::now());
        assert!(token.is_revoked());
    }
}
