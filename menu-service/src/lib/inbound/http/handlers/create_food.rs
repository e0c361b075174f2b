use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use super::list_foods::FoodResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::category::models::CategoryId;
use crate::domain::food::models::FoodCommand;
use crate::domain::food::ports::FoodServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_food(
    State(state): State<AppState>,
    body: Result<Json<FoodRequest>, JsonRejection>,
) -> Result<ApiSuccess<FoodResponseData>, ApiError> {
    let Json(body) = body?;
    body.validate()?;

    state
        .food_service
        .create_food(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref food| ApiSuccess::new(StatusCode::CREATED, food.into()))
}

/// Body accepted by both create and update; update replaces every field.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct FoodRequest {
    #[validate(length(min = 1, max = 50))]
    name: String,
    #[validate(range(min = 0.0))]
    price: f64,
    #[validate(range(min = 1))]
    category_id: i64,
}

impl FoodRequest {
    pub(super) fn into_command(self) -> FoodCommand {
        FoodCommand {
            name: self.name,
            price: self.price,
            category_id: CategoryId(self.category_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(value: serde_json::Value) -> FoodRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let body = request(json!({ "name": "Margherita", "price": 32.9, "category_id": 1 }));

        assert!(body.validate().is_ok());
        assert_eq!(
            body.into_command(),
            FoodCommand {
                name: "Margherita".to_string(),
                price: 32.9,
                category_id: CategoryId(1),
            }
        );
    }

    #[test]
    fn test_rejects_negative_price_and_empty_name() {
        let body = request(json!({ "name": "", "price": -1.0, "category_id": 1 }));

        let errors = body.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("category_id"));
    }

    #[test]
    fn test_rejects_non_positive_category() {
        let body = request(json!({ "name": "Cola", "price": 5.0, "category_id": 0 }));

        assert!(body
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("category_id"));
    }
}
