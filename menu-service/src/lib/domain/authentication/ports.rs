use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::models::Principal;
use crate::domain::authentication::models::SessionToken;

/// Port for sign-in and request gating.
#[async_trait]
pub trait AuthenticatorPort: Send + Sync + 'static {
    /// Check credentials and issue a session token.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Internal` - Store, hashing or token encoding failure
    async fn sign_in(&self, credentials: Credentials) -> Result<SessionToken, AuthError>;

    /// Resolve the principal behind an `Authorization` header value.
    ///
    /// # Errors
    /// * `Unauthenticated` - Header missing or malformed, token invalid or expired
    fn authorize(&self, authorization: Option<&str>) -> Result<Principal, AuthError>;
}
