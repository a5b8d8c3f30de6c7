use crate::domain::error::DomainError;
use crate::domain::meal::{Meal, MealChanges};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

#[async_trait]
pub trait MealRepository: Send + Sync {
    async fn insert(&self, meal: Meal) -> Result<Meal, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Meal>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Meal>, DomainError>;
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Meal>, DomainError>;
    async fn update(&self, id: &str, changes: MealChanges) -> Result<(), DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn count_by_diet(&self, user_id: &str, inside_diet: bool) -> Result<i64, DomainError>;
}

#[derive(Clone)]
pub struct PostgresMealRepository {
    pool: PgPool,
}

impl PostgresMealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MealRepository for PostgresMealRepository {
    async fn insert(&self, meal: Meal) -> Result<Meal, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO meals (id, name, description, datetime, inside_diet, created_at, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&meal.id)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(&meal.datetime)
        .bind(meal.inside_diet)
        .bind(meal.created_at)
        .bind(&meal.user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create meal: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })?;

        info!(meal_id = %meal.id, user_id = %meal.user_id, "meal created");
        Ok(meal)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Meal>, DomainError> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, description, datetime, inside_diet, created_at, user_id
            FROM meals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to find meal by id {}: {}", id, e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }

    async fn list_all(&self) -> Result<Vec<Meal>, DomainError> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, description, datetime, inside_diet, created_at, user_id
            FROM meals
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to list meals: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Meal>, DomainError> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, description, datetime, inside_diet, created_at, user_id
            FROM meals
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to list meals for user {}: {}", user_id, e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }

    async fn update(&self, id: &str, changes: MealChanges) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE meals
            SET name = $1, description = $2, datetime = $3, inside_diet = $4, user_id = $5
            WHERE id = $6
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(&changes.datetime)
        .bind(changes.inside_diet)
        .bind(&changes.user_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update meal {}: {}", id, e);
            DomainError::Internal(format!("database error: {}", e))
        })?;

        info!(meal_id = %id, "meal updated");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to delete meal {}: {}", id, e);
                DomainError::Internal(format!("database error: {}", e))
            })?;

        info!(meal_id = %id, "meal deleted");
        Ok(())
    }

    async fn count_by_diet(&self, user_id: &str, inside_diet: bool) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM meals WHERE user_id = $1 AND inside_diet = $2",
        )
        .bind(user_id)
        .bind(inside_diet)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to count meals for user {}: {}", user_id, e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }
}
