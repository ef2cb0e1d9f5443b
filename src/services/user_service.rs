use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::User, dto::request::RegisterUserRequest},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<User> {
        let request = request.trimmed();
        request.validate()?;

        let user = self.repository.create(User::new(&request.name)).await?;
        log::info!("Registered user '{}' ({})", user.name, user.id);

        Ok(user)
    }

    pub async fn get_user(&self, id: &Uuid) -> AppResult<User> {
        if id.is_nil() {
            return Err(AppError::ValidationError("invalid user id".to_string()));
        }

        self.repository
            .find_by_id(&id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }

    pub async fn get_user_by_name(&self, name: &str) -> AppResult<User> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with name '{}' not found", name)))
    }
}
