use std::sync::Arc;

use crate::domain::user::entities::User;
use crate::domain::user::errors::UserError;
use crate::domain::user::services::UserService;
use crate::domain::user::value_objects::{Email, Password, ValueObjectError};

/// Command for changing a user's password
#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
  pub email: String,
  /// Current password, must match the stored one
  pub old_password: String,
  pub new_password: String,
  /// Must equal `new_password`
  pub confirm_password: String,
}

/// Use case for changing the password of an existing user
pub struct ChangePasswordUseCase {
  user_service: Arc<UserService>,
}

impl ChangePasswordUseCase {
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Executes the password change
  ///
  /// Checks run in order: email, presence of all three passwords, old
  /// password, then the service rules (user exists, confirmation matches).
  ///
  /// # Errors
  /// - `UserError::ValueObject` for an invalid email or a missing password
  /// - `UserError::InvalidCredentials` if the old password is wrong
  /// - `UserError::UserNotFound` / `UserError::PasswordMismatch` from the service
  pub async fn execute(&self, command: ChangePasswordCommand) -> Result<User, UserError> {
    let email = Email::new(command.email)?;

    if command.old_password.is_empty()
      || command.new_password.is_empty()
      || command.confirm_password.is_empty()
    {
      return Err(ValueObjectError::MissingPassword.into());
    }

    let old_password = Password::new(command.old_password)?;
    let new_password = Password::new(command.new_password)?;
    let confirm_password = Password::new(command.confirm_password)?;

    if !self
      .user_service
      .check_password(&email, &old_password)
      .await?
    {
      tracing::warn!(email = %email, "Password change rejected: invalid credentials");
      return Err(UserError::InvalidCredentials);
    }

    self
      .user_service
      .update_password(&email, &new_password, &confirm_password)
      .await
  }
}
