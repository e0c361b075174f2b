use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::errors::TokenRejection;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::models::Principal;
use crate::domain::authentication::models::SessionToken;
use crate::domain::authentication::ports::AuthenticatorPort;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Session lifetime used when none is configured.
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 3600;

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Authentication coordinator combining the user store, password
/// verification and session tokens.
///
/// Holds no mutable state: concurrent sign-ins and authorizations share only
/// the read-only signing key and the store handle.
pub struct Authenticator<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_service: TokenService,
    token_ttl_seconds: u64,
    /// Verified against when the email is unknown, so both sign-in failures
    /// cost one Argon2 verification.
    decoy_hash: String,
}

impl<UR> Authenticator<UR>
where
    UR: UserRepository,
{
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `repository` - User store used to look up accounts by email
    /// * `password_hasher` - Hasher used to verify stored hashes
    /// * `token_service` - Signs and verifies session tokens
    /// * `token_ttl_seconds` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `PasswordError` - The decoy hash could not be computed
    pub fn new(
        repository: Arc<UR>,
        password_hasher: PasswordHasher,
        token_service: TokenService,
        token_ttl_seconds: u64,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            repository,
            password_hasher,
            token_service,
            token_ttl_seconds,
            decoy_hash,
        })
    }
}

#[async_trait]
impl<UR> AuthenticatorPort for Authenticator<UR>
where
    UR: UserRepository,
{
    async fn sign_in(&self, credentials: Credentials) -> Result<SessionToken, AuthError> {
        let Credentials { email, password } = credentials;

        let user = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let stored_hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => self.decoy_hash.clone(),
        };
        let hasher = self.password_hasher.clone();
        let is_valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?;

        let Some(user) = user else {
            tracing::warn!(reason = "unknown_email", "Sign-in rejected");
            return Err(AuthError::UserNotFound);
        };

        if !is_valid {
            tracing::warn!(user_id = %user.id, reason = "wrong_password", "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(user.id.0, self.token_ttl_seconds)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SessionToken(token))
    }

    fn authorize(&self, authorization: Option<&str>) -> Result<Principal, AuthError> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(TokenRejection::MissingToken)?;

        let payload = self
            .token_service
            .verify(token)
            .map_err(TokenRejection::from)?;

        Ok(Principal {
            user_id: UserId(payload.user_id),
        })
    }
}

/// Extract the token from a `Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
