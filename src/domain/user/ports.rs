use async_trait::async_trait;

use super::entities::User;
use super::errors::UserError;
use super::value_objects::{Email, Password, PasswordHash};

/// Record store for user documents
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a new user document
  ///
  /// Fails with `RepositoryError::DuplicateKey` when the email is taken.
  async fn create(&self, user: User) -> Result<User, UserError>;

  /// Finds a single user by email
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserError>;

  /// Sets the password hash of the user matching `email`
  ///
  /// Returns the updated document, or `None` when no document matched.
  async fn update_password(
    &self,
    email: &Email,
    password_hash: &PasswordHash,
  ) -> Result<Option<User>, UserError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, UserError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, UserError>;
}
