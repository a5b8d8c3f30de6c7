use std::sync::Arc;

use tracing::instrument;

use crate::data::meal_repository::MealRepository;
use crate::domain::error::DomainError;
use crate::domain::meal::{Meal, MealChanges, MealMetrics};

#[derive(Clone)]
pub struct MealService {
    repo: Arc<dyn MealRepository>,
}

impl MealService {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create_meal(
        &self,
        user_id: String,
        name: String,
        description: String,
        datetime: String,
        inside_diet: bool,
    ) -> Result<Meal, DomainError> {
        let meal = Meal::new(name, description, datetime, inside_diet, user_id);
        self.repo.insert(meal).await
    }

    pub async fn get_meal(&self, id: &str) -> Result<Option<Meal>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Without an identity token the listing spans every user's meals;
    /// with one it is scoped to that owner.
    pub async fn list_meals(&self, user_id: Option<&str>) -> Result<Vec<Meal>, DomainError> {
        match user_id {
            Some(user_id) => self.repo.list_by_owner(user_id).await,
            None => self.repo.list_all().await,
        }
    }

    #[instrument(skip(self))]
    pub async fn update_meal(&self, id: &str, changes: MealChanges) -> Result<(), DomainError> {
        self.repo.update(id, changes).await
    }

    #[instrument(skip(self))]
    pub async fn delete_meal(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await
    }

    /// Two aggregate counts; the total is their sum rather than a third
    /// query, matching the original contract.
    pub async fn metrics(&self, user_id: &str) -> Result<MealMetrics, DomainError> {
        let inside_diet = self.repo.count_by_diet(user_id, true).await?;
        let outside_diet = self.repo.count_by_diet(user_id, false).await?;

        Ok(MealMetrics {
            total_meals: inside_diet + outside_diet,
            inside_diet,
            outside_diet,
        })
    }
}
