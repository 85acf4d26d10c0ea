use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::user::{
  entities::User,
  errors::{RepositoryError, UserError},
  ports::UserRepository,
  value_objects::{Email, PasswordHash},
};

/// In-process user collection keyed by email
///
/// Mirrors the unique index of the persistent store: inserting a second
/// document with the same email fails with `DuplicateKey`.
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, UserError> {
    let mut users = self.users.write().await;

    if users.contains_key(&user.email) {
      return Err(RepositoryError::DuplicateKey(format!("email {}", user.email)).into());
    }

    users.insert(user.email.clone(), user.clone());
    Ok(user)
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserError> {
    Ok(self.users.read().await.get(email.as_str()).cloned())
  }

  async fn update_password(
    &self,
    email: &Email,
    password_hash: &PasswordHash,
  ) -> Result<Option<User>, UserError> {
    let mut users = self.users.write().await;

    Ok(users.get_mut(email.as_str()).map(|user| {
      user.update_password(password_hash.as_str().to_string());
      user.clone()
    }))
  }
}
