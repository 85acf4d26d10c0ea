use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{ChangePasswordRequest, CreateUserRequest, SuccessResponse, UserResponse},
  errors::ApiError,
};
use crate::application::user::{
  ChangePasswordCommand, ChangePasswordUseCase, CreateUserCommand, CreateUserUseCase,
};

/// Handler for user signup
///
/// POST /api/v1/users
/// Body: CreateUserRequest (JSON)
/// Response: UserResponse (JSON) with status 200
pub async fn create_user_handler(
  request: web::Json<CreateUserRequest>,
  use_case: web::Data<Arc<CreateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = CreateUserCommand {
    name: request.name,
    email: request.email,
    password: request.password,
  };

  let user = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(UserResponse { user }))
}

/// Handler for changing a password
///
/// PUT /api/v1/users/password
/// Body: ChangePasswordRequest (JSON)
/// Response: SuccessResponse (JSON) with status 200
pub async fn change_password_handler(
  request: web::Json<ChangePasswordRequest>,
  use_case: web::Data<Arc<ChangePasswordUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = ChangePasswordCommand {
    email: request.email,
    old_password: request.old_password,
    new_password: request.new_password,
    confirm_password: request.confirm_password,
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
