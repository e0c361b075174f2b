use async_trait::async_trait;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;

pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: CategoryId(r.get("id")),
                name: r.get("name"),
            })
            .collect())
    }
}
