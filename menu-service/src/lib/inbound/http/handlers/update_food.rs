use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use super::create_food::FoodRequest;
use super::list_foods::FoodResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::food::models::FoodId;
use crate::domain::food::ports::FoodServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_food(
    State(state): State<AppState>,
    food_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<FoodRequest>, JsonRejection>,
) -> Result<ApiSuccess<FoodResponseData>, ApiError> {
    let Path(food_id) = food_id?;
    let Json(body) = body?;
    body.validate()?;

    state
        .food_service
        .update_food(FoodId(food_id), body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref food| ApiSuccess::new(StatusCode::OK, food.into()))
}
