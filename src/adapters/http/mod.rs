pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  ChangePasswordRequest, CreateSessionRequest, CreateUserRequest, ErrorResponse, SuccessResponse,
  UserResponse,
};
pub use errors::{AccountErrorKind, ApiError, ValidationErrorKind};
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{ApiDependencies, configure_api, configure_session_routes, configure_user_routes};
