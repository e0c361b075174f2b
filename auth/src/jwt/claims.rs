use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Serialized as `{"userId": .., "iat": .., "exp": ..}`; timestamps are Unix seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Authenticated user identifier
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, valid for `ttl_seconds` starting at `now`.
    pub fn for_user(user_id: i64, ttl_seconds: u64, now: i64) -> Self {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);

        Self {
            user_id,
            iat: now,
            exp: now.saturating_add(ttl),
        }
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// The validity window is `[iat, exp)`: a token is expired from its `exp`
    /// second onwards, so a zero TTL yields a token that is never valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
