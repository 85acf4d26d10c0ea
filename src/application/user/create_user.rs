use std::sync::Arc;

use crate::domain::user::entities::User;
use crate::domain::user::errors::UserError;
use crate::domain::user::services::UserService;
use crate::domain::user::value_objects::{Email, Password, ValueObjectError};

/// Command for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
  /// Optional display name
  pub name: Option<String>,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
}

/// Use case for signing up a new user
pub struct CreateUserUseCase {
  user_service: Arc<UserService>,
}

impl CreateUserUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Executes the signup use case
  ///
  /// The email is validated before the password, and the name last, so a
  /// request missing both reports the email.
  ///
  /// # Errors
  /// Returns `UserError::ValueObject` for an invalid email, password or name and
  /// `UserError::UserAlreadyExists` if the email is taken
  pub async fn execute(&self, command: CreateUserCommand) -> Result<User, UserError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let name = command
      .name
      .map(|name| name.trim().to_string())
      .filter(|name| !name.is_empty());

    if name
      .as_ref()
      .is_some_and(|name| name.chars().count() > User::NAME_MAX_LENGTH)
    {
      return Err(ValueObjectError::NameTooLong.into());
    }

    self.user_service.create(name, email, password).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::Argon2PasswordHasher;

  fn use_case() -> CreateUserUseCase {
    let service = UserService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::with_params(1024, 1, 1).unwrap()),
    );
    CreateUserUseCase::new(Arc::new(service))
  }

  fn command(name: Option<&str>, email: &str, password: &str) -> CreateUserCommand {
    CreateUserCommand {
      name: name.map(str::to_string),
      email: email.to_string(),
      password: password.to_string(),
    }
  }

  #[tokio::test]
  async fn test_creates_user() {
    let user = use_case()
      .execute(command(
        Some("letscode"),
        "letscode@letscode.com.br",
        "123456",
      ))
      .await
      .unwrap();

    assert_eq!(user.name.as_deref(), Some("letscode"));
    assert_eq!(user.email, "letscode@letscode.com.br");
  }

  #[tokio::test]
  async fn test_missing_email_reported_before_password() {
    let result = use_case().execute(command(Some("letscode"), "", "")).await;

    assert!(matches!(
      result,
      Err(UserError::ValueObject(ValueObjectError::MissingEmail))
    ));
  }

  #[tokio::test]
  async fn test_missing_password() {
    let result = use_case()
      .execute(command(None, "letscode@letscode.com.br", ""))
      .await;

    assert!(matches!(
      result,
      Err(UserError::ValueObject(ValueObjectError::MissingPassword))
    ));
  }

  #[tokio::test]
  async fn test_blank_name_is_dropped() {
    let user = use_case()
      .execute(command(Some("   "), "blank@letscode.com.br", "123456"))
      .await
      .unwrap();

    assert!(user.name.is_none());
  }

  #[tokio::test]
  async fn test_long_name_rejected_after_email_and_password() {
    let long_name = "a".repeat(300);

    let result = use_case().execute(command(Some(long_name.as_str()), "", "")).await;
    assert!(matches!(
      result,
      Err(UserError::ValueObject(ValueObjectError::MissingEmail))
    ));

    let result = use_case()
      .execute(command(Some(long_name.as_str()), "letscode@letscode.com.br", "123456"))
      .await;
    assert!(matches!(
      result,
      Err(UserError::ValueObject(ValueObjectError::NameTooLong))
    ));
  }

  #[tokio::test]
  async fn test_name_length_counts_characters() {
    let user = use_case()
      .execute(command(
        Some("é".repeat(255).as_str()),
        "acento@letscode.com.br",
        "123456",
      ))
      .await
      .unwrap();

    assert_eq!(user.name.map(|name| name.chars().count()), Some(255));
  }
}
