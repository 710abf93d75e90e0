//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSessionRepository` - workout session storage
//! - `connect` / `run_migrations` - pool setup used at startup

mod session_repository;

pub use session_repository::PostgresSessionRepository;

use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Open a connection pool using the configured limits.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))
}

/// Apply the migrations bundled under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))
}
