use thiserror::Error;

use crate::domain::category::models::CategoryId;
use crate::domain::food::models::FoodId;

/// Error for food operations
#[derive(Debug, Clone, Error)]
pub enum FoodError {
    #[error("Food not found: {0}")]
    NotFound(FoodId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
