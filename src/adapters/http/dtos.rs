use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::user::entities::User;

/// Reads a string field, treating `null` like an absent field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request for user signup
///
/// Missing or null fields deserialize as empty strings so the controller
/// decides which validation error to report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
  /// Optional display name
  #[serde(default)]
  pub name: Option<String>,

  #[serde(default, deserialize_with = "null_as_empty")]
  pub email: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  pub password: String,
}

/// Request for changing a password
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub email: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  pub old_password: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  pub new_password: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  pub confirm_password: String,
}

/// Request for verifying credentials
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub email: String,

  #[serde(default, deserialize_with = "null_as_empty")]
  pub password: String,
}

/// Response wrapping a user document
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
  pub user: User,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  pub message: String,
}

impl SuccessResponse {
  pub fn ok() -> Self {
    Self {
      message: "ok".to_string(),
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// HTTP status code, repeated in the body
  pub status: u16,

  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_create_user_request_missing_fields_default() {
    let request: CreateUserRequest = serde_json::from_str(r#"{"name": "letscode"}"#).unwrap();

    assert_eq!(request.name.as_deref(), Some("letscode"));
    assert!(request.email.is_empty());
    assert!(request.password.is_empty());
  }

  #[test]
  fn test_null_fields_read_as_empty() {
    let request: CreateUserRequest =
      serde_json::from_str(r#"{"name": null, "email": null, "password": null}"#).unwrap();

    assert!(request.name.is_none());
    assert!(request.email.is_empty());
    assert!(request.password.is_empty());

    let request: ChangePasswordRequest = serde_json::from_str(
      r#"{"email": "email@email.com", "oldPassword": null, "newPassword": null, "confirmPassword": null}"#,
    )
    .unwrap();

    assert_eq!(request.email, "email@email.com");
    assert!(request.old_password.is_empty());
    assert!(request.new_password.is_empty());
    assert!(request.confirm_password.is_empty());
  }

  #[test]
  fn test_wrong_field_type_still_rejected() {
    let result: Result<CreateSessionRequest, _> = serde_json::from_str(r#"{"email": 42}"#);
    assert!(result.is_err());
  }

  #[test]
  fn test_change_password_request_camel_case() {
    let json = r#"{
      "email": "email@email.com",
      "oldPassword": "1247",
      "newPassword": "1245",
      "confirmPassword": "1245"
    }"#;
    let request: ChangePasswordRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.old_password, "1247");
    assert_eq!(request.new_password, "1245");
    assert_eq!(request.confirm_password, "1245");
  }

  #[test]
  fn test_success_response_ok() {
    let json = serde_json::to_value(SuccessResponse::ok()).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "ok" }));
  }
}
