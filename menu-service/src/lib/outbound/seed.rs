use std::path::Path;

use serde::Deserialize;
use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(String),

    #[error("Failed to parse seed file: {0}")]
    Parse(String),

    #[error("Food '{food}' references missing category {category_id}")]
    CategoryNotFound { food: String, category_id: i64 },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for SeedError {
    fn from(e: sqlx::Error) -> Self {
        SeedError::DatabaseError(e.to_string())
    }
}

/// Initial menu content, as stored in `data/seeders.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub foods: Vec<SeedFood>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeedCategory {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeedFood {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|e| SeedError::Parse(e.to_string()))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let content = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(|e| SeedError::Io(format!("{}: {}", path.as_ref().display(), e)))?;

        Self::from_json(&content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The menu already had categories; nothing was written.
    Skipped,
    Seeded { categories: usize, foods: usize },
}

/// Loads initial categories and foods into an empty menu.
pub struct Seeder {
    pool: SqlitePool,
}

impl Seeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert `data` unless categories already exist.
    ///
    /// Everything is written in one transaction: a failing row leaves the
    /// menu empty, so the next start seeds again.
    pub async fn seed(&self, data: SeedData) -> Result<SeedOutcome, SeedError> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(SeedOutcome::Skipped);
        }

        // Categories go first so foods can reference their ids.
        let category_count = data.categories.len();
        for category in data.categories {
            sqlx::query(
                r#"
                INSERT INTO categories (id, name)
                VALUES (?, ?)
                "#,
            )
            .bind(category.id)
            .bind(&category.name)
            .execute(&mut *tx)
            .await?;
        }

        let food_count = data.foods.len();
        for food in data.foods {
            sqlx::query(
                r#"
                INSERT INTO foods (name, price, category_id)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(&food.name)
            .bind(food.price)
            .bind(food.category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return SeedError::CategoryNotFound {
                            food: food.name.clone(),
                            category_id: food.category_id,
                        };
                    }
                }
                SeedError::from(e)
            })?;
        }

        tx.commit().await?;

        tracing::info!(
            categories = category_count,
            foods = food_count,
            "Menu seeded"
        );

        Ok(SeedOutcome::Seeded {
            categories: category_count,
            foods: food_count,
        })
    }
}
