use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::models::Food;
use crate::domain::food::models::FoodCommand;
use crate::domain::food::models::FoodId;
use crate::domain::food::ports::FoodRepository;
use crate::domain::food::ports::FoodServicePort;

/// Domain service implementation for food operations.
pub struct FoodService<FR>
where
    FR: FoodRepository,
{
    repository: Arc<FR>,
}

impl<FR> FoodService<FR>
where
    FR: FoodRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<FR> FoodServicePort for FoodService<FR>
where
    FR: FoodRepository,
{
    async fn list_foods(&self) -> Result<Vec<Food>, FoodError> {
        self.repository.list_all().await
    }

    async fn create_food(&self, command: FoodCommand) -> Result<Food, FoodError> {
        let food = self.repository.create(command).await?;
        tracing::info!(food_id = %food.id, "Food created");
        Ok(food)
    }

    async fn update_food(&self, id: FoodId, command: FoodCommand) -> Result<Food, FoodError> {
        let food = self.repository.update(id, command).await?;
        tracing::info!(food_id = %food.id, "Food updated");
        Ok(food)
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), FoodError> {
        self.repository.delete(id).await?;
        tracing::info!(food_id = %id, "Food deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::category::models::CategoryId;

    mock! {
        pub TestFoodRepository {}

        #[async_trait]
        impl FoodRepository for TestFoodRepository {
            async fn list_all(&self) -> Result<Vec<Food>, FoodError>;
            async fn create(&self, command: FoodCommand) -> Result<Food, FoodError>;
            async fn update(&self, id: FoodId, command: FoodCommand) -> Result<Food, FoodError>;
            async fn delete(&self, id: FoodId) -> Result<(), FoodError>;
        }
    }

    fn command() -> FoodCommand {
        FoodCommand {
            name: "Margherita".to_string(),
            price: 32.9,
            category_id: CategoryId(1),
        }
    }

    #[tokio::test]
    async fn test_create_food_success() {
        let mut repository = MockTestFoodRepository::new();

        repository
            .expect_create()
            .withf(|command| command.name == "Margherita" && command.category_id == CategoryId(1))
            .times(1)
            .returning(|command| {
                Ok(Food {
                    id: FoodId(10),
                    name: command.name,
                    price: command.price,
                    category: "Pizzas".to_string(),
                })
            });

        let service = FoodService::new(Arc::new(repository));

        let food = service.create_food(command()).await.unwrap();
        assert_eq!(food.id, FoodId(10));
        assert_eq!(food.category, "Pizzas");
    }

    #[tokio::test]
    async fn test_create_food_unknown_category() {
        let mut repository = MockTestFoodRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|command| Err(FoodError::CategoryNotFound(command.category_id)));

        let service = FoodService::new(Arc::new(repository));

        let result = service.create_food(command()).await;
        assert!(matches!(result, Err(FoodError::CategoryNotFound(CategoryId(1)))));
    }

    #[tokio::test]
    async fn test_update_food_not_found() {
        let mut repository = MockTestFoodRepository::new();

        repository
            .expect_update()
            .withf(|id, _| *id == FoodId(99))
            .times(1)
            .returning(|id, _| Err(FoodError::NotFound(id)));

        let service = FoodService::new(Arc::new(repository));

        let result = service.update_food(FoodId(99), command()).await;
        assert!(matches!(result, Err(FoodError::NotFound(FoodId(99)))));
    }

    #[tokio::test]
    async fn test_delete_food_success() {
        let mut repository = MockTestFoodRepository::new();

        repository
            .expect_delete()
            .withf(|id| *id == FoodId(3))
            .times(1)
            .returning(|_| Ok(()));

        let service = FoodService::new(Arc::new(repository));

        assert!(service.delete_food(FoodId(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_food_not_found() {
        let mut repository = MockTestFoodRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(FoodError::NotFound(id)));

        let service = FoodService::new(Arc::new(repository));

        let result = service.delete_food(FoodId(3)).await;
        assert!(matches!(result, Err(FoodError::NotFound(FoodId(3)))));
    }
}
