use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diet_server::application::meal_service::MealService;
use diet_server::application::user_service::UserService;
use diet_server::data::meal_repository::MealRepository;
use diet_server::data::user_repository::UserRepository;
use diet_server::domain::error::DomainError;
use diet_server::domain::meal::{Meal, MealChanges};
use diet_server::domain::user::User;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, DomainError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryMealRepository {
    meals: Mutex<Vec<Meal>>,
}

impl InMemoryMealRepository {
    pub fn snapshot(&self) -> Vec<Meal> {
        self.meals.lock().unwrap().clone()
    }
}

#[async_trait]
impl MealRepository for InMemoryMealRepository {
    async fn insert(&self, meal: Meal) -> Result<Meal, DomainError> {
        self.meals.lock().unwrap().push(meal.clone());
        Ok(meal)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Meal>, DomainError> {
        Ok(self
            .meals
            .lock()
            .unwrap()
            .iter()
            .find(|meal| meal.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Meal>, DomainError> {
        Ok(self.meals.lock().unwrap().clone())
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Meal>, DomainError> {
        Ok(self
            .meals
            .lock()
            .unwrap()
            .iter()
            .filter(|meal| meal.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, changes: MealChanges) -> Result<(), DomainError> {
        // UPDATE affecting zero rows is not an error, same as SQL
        if let Some(meal) = self.meals.lock().unwrap().iter_mut().find(|m| m.id == id) {
            meal.name = changes.name;
            meal.description = changes.description;
            meal.datetime = changes.datetime;
            meal.inside_diet = changes.inside_diet;
            meal.user_id = changes.user_id;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.meals.lock().unwrap().retain(|meal| meal.id != id);
        Ok(())
    }

    async fn count_by_diet(&self, user_id: &str, inside_diet: bool) -> Result<i64, DomainError> {
        Ok(self
            .meals
            .lock()
            .unwrap()
            .iter()
            .filter(|meal| meal.user_id == user_id && meal.inside_diet == inside_diet)
            .count() as i64)
    }
}

/// In-memory backend shared between the app under test and the
/// assertions, so tests can both seed rows and inspect stored state.
pub struct TestBackend {
    pub users: Arc<InMemoryUserRepository>,
    pub meals: Arc<InMemoryMealRepository>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::default()),
            meals: Arc::new(InMemoryMealRepository::default()),
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.users.clone())
    }

    pub fn meal_service(&self) -> MealService {
        MealService::new(self.meals.clone())
    }

    pub async fn seed_meal(&self, user_id: &str, name: &str, inside_diet: bool) -> Meal {
        let meal = Meal::new(
            name.into(),
            format!("{} description", name),
            "2024-01-10T12:00:00".into(),
            inside_diet,
            user_id.into(),
        );
        self.meals.insert(meal).await.unwrap()
    }
}
