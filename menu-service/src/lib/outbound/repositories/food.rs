use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::category::models::CategoryId;
use crate::domain::food::errors::FoodError;
use crate::domain::food::models::Food;
use crate::domain::food::models::FoodCommand;
use crate::domain::food::models::FoodId;
use crate::domain::food::ports::FoodRepository;

pub struct SqliteFoodRepository {
    pool: SqlitePool,
}

impl SqliteFoodRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_food(row: SqliteRow) -> Food {
        Food {
            id: FoodId(row.get("id")),
            name: row.get("name"),
            price: row.get("price"),
            category: row.get("category"),
        }
    }

    fn map_write_error(e: sqlx::Error, category_id: CategoryId) -> FoodError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return FoodError::CategoryNotFound(category_id);
            }
        }
        FoodError::DatabaseError(e.to_string())
    }

    async fn find_by_id(&self, id: FoodId) -> Result<Option<Food>, FoodError> {
        let row = sqlx::query(
            r#"
            SELECT f.id, f.name, f.price, c.name AS category
            FROM foods AS f
            INNER JOIN categories AS c ON f.category_id = c.id
            WHERE f.id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FoodError::DatabaseError(e.to_string()))?;

        Ok(row.map(Self::row_to_food))
    }

    async fn read_back(&self, id: FoodId) -> Result<Food, FoodError> {
        self.find_by_id(id).await?.ok_or(FoodError::NotFound(id))
    }
}

#[async_trait]
impl FoodRepository for SqliteFoodRepository {
    async fn list_all(&self) -> Result<Vec<Food>, FoodError> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.name, f.price, c.name AS category
            FROM foods AS f
            INNER JOIN categories AS c ON f.category_id = c.id
            ORDER BY f.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FoodError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::row_to_food).collect())
    }

    async fn create(&self, command: FoodCommand) -> Result<Food, FoodError> {
        let result = sqlx::query(
            r#"
            INSERT INTO foods (name, price, category_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&command.name)
        .bind(command.price)
        .bind(command.category_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, command.category_id))?;

        self.read_back(FoodId(result.last_insert_rowid())).await
    }

    async fn update(&self, id: FoodId, command: FoodCommand) -> Result<Food, FoodError> {
        let result = sqlx::query(
            r#"
            UPDATE foods
            SET name = ?, price = ?, category_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&command.name)
        .bind(command.price)
        .bind(command.category_id.0)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, command.category_id))?;

        if result.rows_affected() == 0 {
            return Err(FoodError::NotFound(id));
        }

        self.read_back(id).await
    }

    async fn delete(&self, id: FoodId) -> Result<(), FoodError> {
        let result = sqlx::query(
            r#"
            DELETE FROM foods
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| FoodError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FoodError::NotFound(id));
        }

        Ok(())
    }
}
