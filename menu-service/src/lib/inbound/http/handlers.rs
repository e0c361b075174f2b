use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::authentication::errors::AuthError;
use crate::domain::category::errors::CategoryError;
use crate::domain::food::errors::FoodError;
use crate::user::errors::UserError;

pub mod create_food;
pub mod create_user;
pub mod delete_food;
pub mod get_current_user;
pub mod list_categories;
pub mod list_foods;
pub mod sign_in;
pub mod update_food;

/// Body sent for every credential or token failure, whatever the cause.
pub const UNAUTHORIZED_MESSAGE: &str = "User not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something broke!";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Content not found";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure that can leave the HTTP layer.
///
/// This is the only place where domain errors are turned into status codes
/// and JSON bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Sign-in or token failure; rendered identically for every cause.
    Unauthorized,
    BadRequest(String),
    Validation(ValidationErrors),
    /// No route matched the request.
    NotFound,
    /// Detail is logged, never sent.
    InternalServerError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationErrors>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMessageData {
    pub message: String,
}

impl ApiErrorData {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ApiErrorData::new(UNAUTHORIZED_MESSAGE)),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ApiErrorData::new(message))).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ApiErrorData {
                    error: "Validation failed".to_string(),
                    details: Some(errors),
                }),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ApiMessageData {
                    message: ROUTE_NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiMessageData {
                        message: INTERNAL_ERROR_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserNotFound
            | AuthError::InvalidCredentials
            | AuthError::Unauthenticated(_) => ApiError::Unauthorized,
            AuthError::Internal(msg) => ApiError::InternalServerError(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateEmail(_) => ApiError::BadRequest("Email already exists".to_string()),
            UserError::InvalidEmail(_) => ApiError::BadRequest(err.to_string()),
            // A valid token whose user no longer exists.
            UserError::NotFound(_) => ApiError::Unauthorized,
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<FoodError> for ApiError {
    fn from(err: FoodError) -> Self {
        match err {
            FoodError::NotFound(_) => ApiError::BadRequest("Food not found.".to_string()),
            FoodError::CategoryNotFound(_) => {
                ApiError::BadRequest("Category not found.".to_string())
            }
            FoodError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;
    use serde_json::Value;

    use super::*;
    use crate::domain::authentication::errors::TokenRejection;
    use crate::domain::category::models::CategoryId;
    use crate::domain::food::models::FoodId;

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_sign_in_failures_render_identically() {
        let unknown = render(AuthError::UserNotFound.into()).await;
        let wrong_password = render(AuthError::InvalidCredentials.into()).await;
        let no_token = render(AuthError::Unauthenticated(TokenRejection::MissingToken).into()).await;
        let expired = render(AuthError::Unauthenticated(TokenRejection::ExpiredToken).into()).await;

        assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.1, json!({ "error": "User not found" }));
        assert_eq!(unknown, wrong_password);
        assert_eq!(unknown, no_token);
        assert_eq!(unknown, expired);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let (status, body) = render(UserError::DuplicateEmail("a@x.com".to_string()).into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Email already exists" }));
    }

    #[tokio::test]
    async fn test_food_not_found() {
        let (status, body) = render(FoodError::NotFound(FoodId(3)).into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Food not found." }));
    }

    #[tokio::test]
    async fn test_category_not_found() {
        let (status, body) = render(FoodError::CategoryNotFound(CategoryId(9)).into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Category not found." }));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) = render(
            UserError::DatabaseError("no such table: users".to_string()).into(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Something broke!" }));
    }

    #[tokio::test]
    async fn test_auth_internal_error_hides_detail() {
        let (status, body) =
            render(AuthError::Internal("database is locked".to_string()).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Something broke!" }));
    }

    #[tokio::test]
    async fn test_route_not_found() {
        let (status, body) = render(not_found().await).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Content not found" }));
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("email", validator::ValidationError::new("email"));

        let (status, body) = render(errors.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"]["email"].is_array());
    }
}
