use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Identity carried by a verified session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPayload {
    pub user_id: i64,
}

/// Issues and verifies HS256-signed session tokens.
///
/// Tokens are stateless: a token is valid exactly when its signature matches
/// the server secret and the current time is before its `exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be at least 32 bytes)
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `user_id` that expires `ttl_seconds` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: i64, ttl_seconds: u64) -> Result<String, TokenError> {
        self.issue_at(user_id, ttl_seconds, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds).
    pub fn issue_at(&self, user_id: i64, ttl_seconds: u64, now: i64) -> Result<String, TokenError> {
        let claims = Claims::for_user(user_id, ttl_seconds, now);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, or signed with another key/algorithm
    /// * `ExpiredToken` - Signature is valid but the token has expired
    pub fn verify(&self, token: &str) -> Result<TokenPayload, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now` (Unix seconds).
    pub fn verify_at(&self, token: &str, now: i64) -> Result<TokenPayload, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against `now` so it stays a pure function of the input.
        validation.validate_exp = false;

        // decode() checks the header algorithm and signature before deserializing claims.
        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?
            .claims;

        if claims.is_expired(now) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(TokenPayload {
            user_id: claims.user_id,
        })
    }
}
