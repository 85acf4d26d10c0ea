use std::sync::Arc;

use super::entities::User;
use super::errors::{RepositoryError, UserError};
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash};

/// User account service implementing the account business rules
pub struct UserService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
  /// Creates a new instance of UserService
  pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      user_repo,
      password_hasher,
    }
  }

  /// Looks up a user by email
  pub async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserError> {
    self.user_repo.find_by_email(email).await
  }

  /// Returns whether a user with the given email exists
  ///
  /// # Errors
  /// Store failures are propagated, never reported as "absent".
  pub async fn user_exists(&self, email: &Email) -> Result<bool, UserError> {
    Ok(self.find_by_email(email).await?.is_some())
  }

  /// Compares a supplied password with the stored one
  ///
  /// Returns `false` both for an unknown user and for a wrong password.
  pub async fn check_password(&self, email: &Email, password: &Password) -> Result<bool, UserError> {
    match self.verify_credentials(email, password).await {
      Ok(_) => Ok(true),
      Err(UserError::InvalidCredentials) => Ok(false),
      Err(e) => Err(e),
    }
  }

  /// Verifies an email/password pair and returns the matching user
  ///
  /// # Errors
  /// Returns `UserError::InvalidCredentials` if the user does not exist or the
  /// password does not match
  pub async fn verify_credentials(
    &self,
    email: &Email,
    password: &Password,
  ) -> Result<User, UserError> {
    let user = self
      .find_by_email(email)
      .await?
      .ok_or(UserError::InvalidCredentials)?;

    let stored_hash = PasswordHash::from_hash(user.password_hash.as_str())?;

    if !self.password_hasher.verify(password, &stored_hash).await? {
      tracing::debug!(email = %email, "Password verification failed");
      return Err(UserError::InvalidCredentials);
    }

    Ok(user)
  }

  /// Creates a new user
  ///
  /// # Arguments
  /// * `name` - Optional display name
  /// * `email` - The user's email address
  /// * `password` - The user's password (will be hashed)
  ///
  /// # Errors
  /// Returns `UserError::UserAlreadyExists` if the email is already registered
  pub async fn create(
    &self,
    name: Option<String>,
    email: Email,
    password: Password,
  ) -> Result<User, UserError> {
    if self.user_exists(&email).await? {
      return Err(UserError::UserAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;
    let user = User::new(name, email.into_inner(), password_hash.into_inner());

    // A concurrent signup can still win the race; the unique index reports it
    let created = match self.user_repo.create(user).await {
      Ok(user) => user,
      Err(UserError::Repository(RepositoryError::DuplicateKey(_))) => {
        return Err(UserError::UserAlreadyExists);
      }
      Err(e) => return Err(e),
    };

    tracing::info!(user_id = %created.id, "User created");

    Ok(created)
  }

  /// Replaces the stored password of an existing user
  ///
  /// # Errors
  /// Returns `UserError::UserNotFound` if no user has this email, and
  /// `UserError::PasswordMismatch` if the confirmation differs. The existence
  /// check runs first.
  pub async fn update_password(
    &self,
    email: &Email,
    new_password: &Password,
    confirm_password: &Password,
  ) -> Result<User, UserError> {
    if !self.user_exists(email).await? {
      return Err(UserError::UserNotFound);
    }

    if new_password != confirm_password {
      return Err(UserError::PasswordMismatch);
    }

    let password_hash = self.password_hasher.hash(new_password).await?;

    let updated = self
      .user_repo
      .update_password(email, &password_hash)
      .await?
      .ok_or(UserError::UserNotFound)?;

    tracing::info!(user_id = %updated.id, "Password updated");

    Ok(updated)
  }
}
