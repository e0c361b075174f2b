use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_user::UserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::Principal;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Profile of the user the session token was issued to.
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .user_service
        .get_user(principal.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
