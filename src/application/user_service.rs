use std::sync::Arc;

use tracing::instrument;

use crate::data::user_repository::UserRepository;
use crate::domain::{error::DomainError, user::User};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, name: String, email: String) -> Result<User, DomainError> {
        let user = User::new(name, email);
        self.repo.insert(user).await
    }

    /// Absent users are not an error at this level; the route returns an
    /// empty envelope with status 200.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, DomainError> {
        self.repo.find_by_id(id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list_all().await
    }
}
