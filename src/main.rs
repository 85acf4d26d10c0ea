use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accountd::{
  adapters::http::{ApiDependencies, RequestIdMiddleware, configure_api},
  application::user::{ChangePasswordUseCase, CreateUserUseCase, VerifyCredentialsUseCase},
  domain::user::{ports::UserRepository, services::UserService},
  infrastructure::{
    config::{Config, DatabaseConfig, StorageBackend},
    persistence::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "accountd=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting accountd");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid configuration: {}", e),
    )
  })?;
  tracing::info!("Configuration loaded successfully");

  let user_repo = build_user_repository(&config.database).await?;

  let password_hasher = Arc::new(Argon2PasswordHasher::from_config(&config.security).map_err(
    |e| {
      tracing::error!("Failed to create password hasher: {}", e);
      std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    },
  )?);

  let user_service = Arc::new(UserService::new(user_repo, password_hasher));

  let deps = ApiDependencies {
    create_user_use_case: Arc::new(CreateUserUseCase::new(user_service.clone())),
    change_password_use_case: Arc::new(ChangePasswordUseCase::new(user_service.clone())),
    verify_credentials_use_case: Arc::new(VerifyCredentialsUseCase::new(user_service.clone())),
  };

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .configure(|cfg| configure_api(cfg, deps.clone()))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Builds the record store selected by `[database].backend`
async fn build_user_repository(
  config: &DatabaseConfig,
) -> std::io::Result<Arc<dyn UserRepository>> {
  match config.backend {
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory user store; accounts are lost on restart");
      Ok(Arc::new(InMemoryUserRepository::new()))
    }
    StorageBackend::Postgres => {
      let url = config.url.as_deref().ok_or_else(|| {
        std::io::Error::new(
          std::io::ErrorKind::InvalidInput,
          "database.url is required for the postgres backend",
        )
      })?;

      tracing::info!("Connecting to database");

      let db_pool = tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_seconds),
        PgPoolOptions::new()
          .max_connections(config.max_connections)
          .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
          .connect(url),
      )
      .await
      .map_err(|_| {
        tracing::error!(
          "Database connection timed out after {} seconds. Is PostgreSQL running?",
          config.connect_timeout_seconds
        );
        std::io::Error::new(
          std::io::ErrorKind::TimedOut,
          format!(
            "Database connection timed out after {} seconds",
            config.connect_timeout_seconds
          ),
        )
      })?
      .map_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
        match e {
          sqlx::Error::Io(_) => std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Could not connect to database. Is PostgreSQL running?",
          ),
          _ => std::io::Error::other(format!("Database error: {}", e)),
        }
      })?;

      tracing::info!("Running database migrations");
      sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| {
          tracing::error!("Failed to run database migrations: {}", e);
          std::io::Error::other(format!("Migration error: {}", e))
        })?;
      tracing::info!("Database migrations completed");

      Ok(Arc::new(PostgresUserRepository::new(db_pool)))
    }
  }
}
