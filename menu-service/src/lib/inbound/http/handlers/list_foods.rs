use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::food::models::Food;
use crate::domain::food::ports::FoodServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_foods(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<FoodResponseData>>, ApiError> {
    let foods = state.food_service.list_foods().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        foods.iter().map(FoodResponseData::from).collect(),
    ))
}

/// Food as rendered to clients; `category` is the category name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodResponseData {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl From<&Food> for FoodResponseData {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id.0,
            name: food.name.clone(),
            price: food.price,
            category: food.category.clone(),
        }
    }
}
