use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::food::models::FoodId;
use crate::domain::food::ports::FoodServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_food(
    State(state): State<AppState>,
    food_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(food_id) = food_id?;

    state.food_service.delete_food(FoodId(food_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
