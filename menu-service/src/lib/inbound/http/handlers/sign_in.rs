use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use validator::Validate;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::AuthenticatorPort;
use crate::inbound::http::router::AppState;

/// Exchange email and password for a session token.
pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    let Json(body) = body?;
    body.validate()?;

    let token = state
        .authenticator
        .sign_in(Credentials::new(body.email, body.password))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SignInResponseData {
            auth: true,
            token: token.0,
        },
    ))
}

#[derive(Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1))]
    email: String,
    #[validate(length(min = 1))]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub auth: bool,
    pub token: String,
}
