use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// List every category.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Retrieve all categories ordered by id.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;
}
