use std::sync::Arc;

use crate::domain::user::entities::User;
use crate::domain::user::errors::UserError;
use crate::domain::user::services::UserService;
use crate::domain::user::value_objects::{Email, Password};

/// Command for verifying a user's credentials
#[derive(Debug, Clone)]
pub struct VerifyCredentialsCommand {
  pub email: String,
  pub password: String,
}

/// Use case for checking an email/password pair (session create)
pub struct VerifyCredentialsUseCase {
  user_service: Arc<UserService>,
}

impl VerifyCredentialsUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Executes the credential check
  ///
  /// # Errors
  /// Returns `UserError::ValueObject` for an invalid email or missing password
  /// and `UserError::InvalidCredentials` for an unknown user or wrong password
  pub async fn execute(&self, command: VerifyCredentialsCommand) -> Result<User, UserError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let user = self
      .user_service
      .verify_credentials(&email, &password)
      .await?;

    tracing::info!(user_id = %user.id, "Credentials verified");

    Ok(user)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::user::value_objects::ValueObjectError;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::Argon2PasswordHasher;

  async fn use_case() -> VerifyCredentialsUseCase {
    let service = Arc::new(UserService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::with_params(1024, 1, 1).unwrap()),
    ));
    service
      .create(
        None,
        Email::new("letscode@letscode.com.br").unwrap(),
        Password::new("123456").unwrap(),
      )
      .await
      .unwrap();
    VerifyCredentialsUseCase::new(service)
  }

  fn command(email: &str, password: &str) -> VerifyCredentialsCommand {
    VerifyCredentialsCommand {
      email: email.to_string(),
      password: password.to_string(),
    }
  }

  #[tokio::test]
  async fn test_valid_credentials() {
    let user = use_case()
      .await
      .execute(command("LetsCode@letscode.com.br", "123456"))
      .await
      .unwrap();

    assert_eq!(user.email, "letscode@letscode.com.br");
  }

  #[tokio::test]
  async fn test_wrong_password() {
    let result = use_case()
      .await
      .execute(command("letscode@letscode.com.br", "654321"))
      .await;

    assert!(matches!(result, Err(UserError::InvalidCredentials)));
  }

  #[tokio::test]
  async fn test_missing_password() {
    let result = use_case()
      .await
      .execute(command("letscode@letscode.com.br", ""))
      .await;

    assert!(matches!(
      result,
      Err(UserError::ValueObject(ValueObjectError::MissingPassword))
    ));
  }
}
