use auth::TokenError;
use thiserror::Error;

/// Why a protected request was turned away.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("expired token")]
    ExpiredToken,
}

impl From<TokenError> for TokenRejection {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::ExpiredToken => TokenRejection::ExpiredToken,
            TokenError::InvalidToken(msg) => TokenRejection::InvalidToken(msg),
            // Only issuing encodes; verification never yields this variant.
            TokenError::EncodingFailed(msg) => {
                tracing::error!(error = %msg, "Token verification reported an encoding failure");
                TokenRejection::InvalidToken(msg)
            }
        }
    }
}

/// Authentication operation errors.
///
/// `UserNotFound` and `InvalidCredentials` stay distinct here for diagnostics;
/// the HTTP layer renders them identically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No user registered with this email")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated: {0}")]
    Unauthenticated(#[from] TokenRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_to_rejection() {
        assert_eq!(
            TokenRejection::from(TokenError::ExpiredToken),
            TokenRejection::ExpiredToken
        );
        assert_eq!(
            TokenRejection::from(TokenError::InvalidToken("InvalidSignature".to_string())),
            TokenRejection::InvalidToken("InvalidSignature".to_string())
        );
    }
}
