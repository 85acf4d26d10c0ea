use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::user::errors::{RepositoryError, UserError};
use crate::domain::user::value_objects::ValueObjectError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Request validation error (400 Bad Request)
  Validation(ValidationErrorKind),

  /// Account lookup or credential error (401/404)
  Account(AccountErrorKind),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Request validation error kinds, all 400
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
  /// Email missing or not a valid address
  InvalidEmail,

  /// A required password is missing or unusable
  InvalidPassword,

  /// New password and confirmation differ
  PasswordMismatch,

  /// Body could not be parsed or failed field validation
  Malformed(String),
}

/// Account error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountErrorKind {
  /// Unknown user or wrong password (401)
  InvalidCredentials,

  /// User not found (404)
  UserNotFound,

  /// Email already registered (404)
  UserAlreadyExists,
}

impl ApiError {
  /// Machine-readable error code and client-facing message
  fn code_and_message(&self) -> (&'static str, String) {
    match self {
      ApiError::Validation(kind) => match kind {
        ValidationErrorKind::InvalidEmail => {
          ("invalid_email", "Email is missing or invalid".to_string())
        }
        ValidationErrorKind::InvalidPassword => (
          "invalid_password",
          "Password is missing or invalid".to_string(),
        ),
        ValidationErrorKind::PasswordMismatch => (
          "password_mismatch",
          UserError::PasswordMismatch.to_string(),
        ),
        ValidationErrorKind::Malformed(msg) => ("validation_error", msg.clone()),
      },
      ApiError::Account(kind) => match kind {
        AccountErrorKind::InvalidCredentials => (
          "invalid_credentials",
          "Invalid email or password".to_string(),
        ),
        AccountErrorKind::UserNotFound => ("user_not_found", UserError::UserNotFound.to_string()),
        AccountErrorKind::UserAlreadyExists => (
          "user_already_exists",
          UserError::UserAlreadyExists.to_string(),
        ),
      },
      ApiError::Internal(_) => (
        "internal_error",
        "An internal server error occurred".to_string(),
      ),
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(kind) => write!(f, "Validation error: {:?}", kind),
      ApiError::Account(kind) => write!(f, "Account error: {:?}", kind),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Account(kind) => match kind {
        AccountErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountErrorKind::UserNotFound => StatusCode::NOT_FOUND,
        AccountErrorKind::UserAlreadyExists => StatusCode::NOT_FOUND,
      },
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();

    if let ApiError::Internal(msg) = self {
      // Details stay in the logs
      tracing::error!("Internal error: {}", msg);
    }

    let (error, message) = self.code_and_message();

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(ErrorResponse {
        status: status.as_u16(),
        error: error.to_string(),
        message,
      })
  }
}

/// Convert UserError to ApiError
impl From<UserError> for ApiError {
  fn from(error: UserError) -> Self {
    match error {
      UserError::UserAlreadyExists => ApiError::Account(AccountErrorKind::UserAlreadyExists),
      UserError::UserNotFound => ApiError::Account(AccountErrorKind::UserNotFound),
      UserError::InvalidCredentials => ApiError::Account(AccountErrorKind::InvalidCredentials),
      UserError::PasswordMismatch => ApiError::Validation(ValidationErrorKind::PasswordMismatch),
      UserError::ValueObject(err) => match err {
        ValueObjectError::InvalidEmail(_) | ValueObjectError::MissingEmail => {
          ApiError::Validation(ValidationErrorKind::InvalidEmail)
        }
        ValueObjectError::MissingPassword | ValueObjectError::PasswordTooLong => {
          ApiError::Validation(ValidationErrorKind::InvalidPassword)
        }
        // A stored hash that does not parse is a data problem, not a client one
        ValueObjectError::InvalidPasswordHash => ApiError::Internal(err.to_string()),
        ValueObjectError::NameTooLong => {
          ApiError::Validation(ValidationErrorKind::Malformed(err.to_string()))
        }
      },
      UserError::Repository(err) => match err {
        RepositoryError::NotFound => ApiError::Account(AccountErrorKind::UserNotFound),
        RepositoryError::DuplicateKey(_) => ApiError::Account(AccountErrorKind::UserAlreadyExists),
        _ => ApiError::Internal(err.to_string()),
      },
      UserError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}
