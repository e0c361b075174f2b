use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::category::models::Category;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CategoryResponseData>>, ApiError> {
    let categories = state.category_service.list_categories().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        categories.iter().map(CategoryResponseData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponseData {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryResponseData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.clone(),
        }
    }
}
