use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account document
///
/// Serialized with the document-store field names (`_id`, `__v`). The
/// password hash never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user document
  #[serde(rename = "_id")]
  pub id: Uuid,
  /// Optional display name
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// User's email address (unique, lowercase)
  pub email: String,
  /// Hashed password using Argon2
  #[serde(skip_serializing, default)]
  pub password_hash: String,
  /// Document revision, bumped on every update
  #[serde(rename = "__v")]
  pub version: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Longest accepted display name, in characters
  pub const NAME_MAX_LENGTH: usize = 255;

  /// Creates a new user document at revision 0
  pub fn new(name: Option<String>, email: String, password_hash: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      password_hash,
      version: 0,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from stored fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    name: Option<String>,
    email: String,
    password_hash: String,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      email,
      password_hash,
      version,
      created_at,
      updated_at,
    }
  }

  /// Replaces the password hash and bumps the revision
  pub fn update_password(&mut self, new_password_hash: String) {
    self.password_hash = new_password_hash;
    self.version += 1;
    self.updated_at = Utc::now();
  }
}
