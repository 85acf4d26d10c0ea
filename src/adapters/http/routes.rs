use actix_web::{HttpRequest, error::JsonPayloadError, web};
use std::sync::Arc;

use crate::application::user::{ChangePasswordUseCase, CreateUserUseCase, VerifyCredentialsUseCase};

use super::errors::{ApiError, ValidationErrorKind};
use super::handlers::{
  health_check,
  sessions::create_session_handler,
  users::{change_password_handler, create_user_handler},
};

/// Use cases shared by every worker of the HTTP server
#[derive(Clone)]
pub struct ApiDependencies {
  pub create_user_use_case: Arc<CreateUserUseCase>,
  pub change_password_use_case: Arc<ChangePasswordUseCase>,
  pub verify_credentials_use_case: Arc<VerifyCredentialsUseCase>,
}

/// Configure user routes
///
/// # Routes
///
/// - POST "" - Create a user
/// - PUT /password - Change a user's password
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  create_user_use_case: Arc<CreateUserUseCase>,
  change_password_use_case: Arc<ChangePasswordUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_user_use_case))
    .app_data(web::Data::new(change_password_use_case))
    .route("", web::post().to(create_user_handler))
    .route("/password", web::put().to(change_password_handler));
}

/// Configure session routes
///
/// # Routes
///
/// - POST "" - Verify credentials
pub fn configure_session_routes(
  cfg: &mut web::ServiceConfig,
  verify_credentials_use_case: Arc<VerifyCredentialsUseCase>,
) {
  cfg
    .app_data(web::Data::new(verify_credentials_use_case))
    .route("", web::post().to(create_session_handler));
}

/// Mounts the whole API on an application
///
/// ```no_run
/// use actix_web::App;
/// # use accountd::adapters::http::routes::{ApiDependencies, configure_api};
///
/// # fn example(deps: ApiDependencies) {
/// let app = App::new().configure(|cfg| configure_api(cfg, deps.clone()));
/// # }
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig, deps: ApiDependencies) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .service(web::scope("/api/v1/users").configure(|cfg| {
      configure_user_routes(
        cfg,
        deps.create_user_use_case.clone(),
        deps.change_password_use_case.clone(),
      )
    }))
    .service(
      web::scope("/api/v1/sessions")
        .configure(|cfg| configure_session_routes(cfg, deps.verify_credentials_use_case.clone())),
    )
    .route("/health", web::get().to(health_check));
}

/// Answers unparseable JSON bodies with the standard error envelope
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  ApiError::Validation(ValidationErrorKind::Malformed(err.to_string())).into()
}
