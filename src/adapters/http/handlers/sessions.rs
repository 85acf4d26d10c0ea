use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{CreateSessionRequest, UserResponse},
  errors::ApiError,
};
use crate::adapters::http::middleware::RequestIdExt;
use crate::application::user::{VerifyCredentialsCommand, VerifyCredentialsUseCase};

/// Handler for verifying credentials
///
/// POST /api/v1/sessions
/// Body: CreateSessionRequest (JSON)
/// Response: UserResponse (JSON) with status 200
pub async fn create_session_handler(
  request: web::Json<CreateSessionRequest>,
  use_case: web::Data<Arc<VerifyCredentialsUseCase>>,
  http_req: actix_web::HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = VerifyCredentialsCommand {
    email: request.email,
    password: request.password,
  };

  let user = use_case.execute(command).await.inspect_err(|e| {
    tracing::debug!(
      request_id = ?http_req.request_id(),
      "Session create rejected: {}",
      e
    );
  })?;

  Ok(HttpResponse::Ok().json(UserResponse { user }))
}
