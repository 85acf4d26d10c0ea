use argon2::PasswordHash as Argon2PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid email format: {0}")]
  InvalidEmail(String),

  #[error("Email is required")]
  MissingEmail,

  #[error("Password is required")]
  MissingPassword,

  #[error("Password is too long (maximum 128 characters)")]
  PasswordTooLong,

  #[error("Invalid password hash format")]
  InvalidPasswordHash,

  #[error("Name must be at most 255 characters")]
  NameTooLong,
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email = email.into();
    let trimmed = email.trim();

    if trimmed.is_empty() {
      return Err(ValueObjectError::MissingEmail);
    }

    // Normalize to lowercase
    let normalized = trimmed.to_lowercase();

    if !normalized.validate_email() {
      return Err(ValueObjectError::InvalidEmail(email));
    }

    Ok(Self(normalized))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// Plain text password as submitted by a client.
///
/// The buffer is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  pub const MAX_LENGTH: usize = 128;

  /// Creates a new Password, rejecting empty and over-long input
  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValueObjectError::MissingPassword);
    }

    if password.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::PasswordTooLong);
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (PHC string)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Wraps an existing hash string, rejecting anything that is not a PHC string
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValueObjectError> {
    let hash = hash.into();

    Argon2PasswordHash::new(&hash).map_err(|_| ValueObjectError::InvalidPasswordHash)?;

    Ok(Self(hash))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_email_validation() {
    assert!(Email::new("letscode@letscode.com.br").is_ok());
    assert!(Email::new("user.name@domain.co.uk").is_ok());

    assert!(matches!(
      Email::new("email.com"),
      Err(ValueObjectError::InvalidEmail(_))
    ));
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("test@").is_err());
  }

  #[test]
  fn test_email_missing() {
    assert!(matches!(Email::new(""), Err(ValueObjectError::MissingEmail)));
    assert!(matches!(
      Email::new("   "),
      Err(ValueObjectError::MissingEmail)
    ));
  }

  #[test]
  fn test_email_normalization() {
    let email = Email::new(" Esdras@Lets.COM.br ").unwrap();
    assert_eq!(email.as_str(), "esdras@lets.com.br");
  }

  #[test]
  fn test_password_validation() {
    assert!(Password::new("123456").is_ok());
    assert!(Password::new("1").is_ok());

    assert!(matches!(
      Password::new(""),
      Err(ValueObjectError::MissingPassword)
    ));

    let long_password = "a".repeat(129);
    assert!(matches!(
      Password::new(long_password),
      Err(ValueObjectError::PasswordTooLong)
    ));
  }

  #[test]
  fn test_password_length_counts_characters() {
    assert!(Password::new("é".repeat(128)).is_ok());
    assert!(matches!(
      Password::new("é".repeat(129)),
      Err(ValueObjectError::PasswordTooLong)
    ));
  }

  #[test]
  fn test_password_is_redacted() {
    let password = Password::new("senha").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
    assert_eq!(password.to_string(), "***");
  }

  #[test]
  fn test_password_hash_rejects_plain_text() {
    assert!(matches!(
      PasswordHash::from_hash("123456"),
      Err(ValueObjectError::InvalidPasswordHash)
    ));

    use argon2::password_hash::SaltString;
    use argon2::{Argon2, PasswordHasher};

    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    let phc = Argon2::default()
      .hash_password(b"123456", &salt)
      .unwrap()
      .to_string();
    assert!(PasswordHash::from_hash(phc).is_ok());
  }
}
