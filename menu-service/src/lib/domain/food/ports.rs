use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::models::Food;
use crate::domain::food::models::FoodCommand;
use crate::domain::food::models::FoodId;

/// Port for food domain service operations.
#[async_trait]
pub trait FoodServicePort: Send + Sync + 'static {
    /// List every food with its category name.
    async fn list_foods(&self) -> Result<Vec<Food>, FoodError>;

    /// Add a food to the menu.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_food(&self, command: FoodCommand) -> Result<Food, FoodError>;

    /// Replace every writable field of a food.
    ///
    /// # Errors
    /// * `NotFound` - Food does not exist
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_food(&self, id: FoodId, command: FoodCommand) -> Result<Food, FoodError>;

    /// Remove a food from the menu.
    ///
    /// # Errors
    /// * `NotFound` - Food does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_food(&self, id: FoodId) -> Result<(), FoodError>;
}

/// Persistence operations for foods.
#[async_trait]
pub trait FoodRepository: Send + Sync + 'static {
    /// Retrieve all foods ordered by id.
    async fn list_all(&self) -> Result<Vec<Food>, FoodError>;

    /// Persist a new food and return it as read back from storage.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Foreign key to category violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: FoodCommand) -> Result<Food, FoodError>;

    /// Overwrite an existing food.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `CategoryNotFound` - Foreign key to category violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: FoodId, command: FoodCommand) -> Result<Food, FoodError>;

    /// Remove a food.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: FoodId) -> Result<(), FoodError>;
}
