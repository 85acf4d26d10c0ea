use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::user::errors::{HashError, UserError};
use crate::domain::user::ports::PasswordHasher;
use crate::domain::user::value_objects::{Password, PasswordHash};
use crate::infrastructure::config::SecurityConfig;

/// Argon2id password hasher implementation
///
/// Default parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  pub const DEFAULT_MEMORY_COST_KIB: u32 = 19456;
  pub const DEFAULT_TIME_COST: u32 = 2;
  pub const DEFAULT_PARALLELISM: u32 = 1;

  /// Creates a hasher with the default parameters
  pub fn new() -> Result<Self, UserError> {
    Self::with_params(
      Self::DEFAULT_MEMORY_COST_KIB,
      Self::DEFAULT_TIME_COST,
      Self::DEFAULT_PARALLELISM,
    )
  }

  /// Creates a hasher with explicit Argon2id cost parameters
  pub fn with_params(
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u32,
  ) -> Result<Self, UserError> {
    let params = Params::new(memory_cost_kib, time_cost, parallelism, Some(32))
      .map_err(|e| HashError::InvalidParams(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  /// Creates a hasher from the `[security]` configuration section
  pub fn from_config(config: &SecurityConfig) -> Result<Self, UserError> {
    Self::with_params(
      config.argon2_memory_cost_kib,
      config.argon2_time_cost,
      config.argon2_parallelism,
    )
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, UserError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| HashError::HashingFailed(e.to_string()))?;

    PasswordHash::from_hash(hash.to_string())
      .map_err(|e| UserError::Hash(HashError::HashingFailed(format!("Invalid hash format: {}", e))))
  }

  /// Verifies a plain text password against a stored hash
  ///
  /// The comparison inside `verify_password` is constant-time. A hash created
  /// with other cost parameters still verifies, since the PHC string carries them.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, UserError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
      .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(UserError::Hash(HashError::VerificationFailed(e.to_string()))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fast_hasher() -> Argon2PasswordHasher {
    Argon2PasswordHasher::with_params(1024, 1, 1).unwrap()
  }

  #[tokio::test]
  async fn test_hash_password() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("123456").unwrap();

    let hash = hasher.hash(&password).await.unwrap();
    assert!(hash.as_str().starts_with("$argon2id$"));
    assert!(!hash.as_str().contains("123456"));
  }

  #[tokio::test]
  async fn test_verify_correct_and_incorrect_password() {
    let hasher = fast_hasher();
    let password = Password::new("1247").unwrap();
    let wrong_password = Password::new("1245").unwrap();

    let hash = hasher.hash(&password).await.unwrap();

    assert!(hasher.verify(&password, &hash).await.unwrap());
    assert!(!hasher.verify(&wrong_password, &hash).await.unwrap());
  }

  #[tokio::test]
  async fn test_hash_produces_different_salts() {
    let hasher = fast_hasher();
    let password = Password::new("senha").unwrap();

    let hash1 = hasher.hash(&password).await.unwrap();
    let hash2 = hasher.hash(&password).await.unwrap();

    assert_ne!(hash1.as_str(), hash2.as_str());
    assert!(hasher.verify(&password, &hash1).await.unwrap());
    assert!(hasher.verify(&password, &hash2).await.unwrap());
  }

  #[tokio::test]
  async fn test_verify_hash_from_other_parameters() {
    let password = Password::new("senha").unwrap();
    let hash = fast_hasher().hash(&password).await.unwrap();

    let default_hasher = Argon2PasswordHasher::new().unwrap();
    assert!(default_hasher.verify(&password, &hash).await.unwrap());
  }

  #[test]
  fn test_invalid_params_rejected() {
    let result = Argon2PasswordHasher::with_params(0, 0, 0);
    assert!(matches!(
      result,
      Err(UserError::Hash(HashError::InvalidParams(_)))
    ));
  }

  #[tokio::test]
  async fn test_argon2_parameters() {
    let hasher = Argon2PasswordHasher::with_params(2048, 3, 1).unwrap();
    let password = Password::new("123456").unwrap();

    let hash = hasher.hash(&password).await.unwrap();
    let parsed = Argon2PasswordHash::new(hash.as_str()).unwrap();

    assert_eq!(parsed.version, Some(Version::V0x13 as u32));
    assert_eq!(parsed.params.get_decimal("m"), Some(2048));
    assert_eq!(parsed.params.get_decimal("t"), Some(3));
  }
}
