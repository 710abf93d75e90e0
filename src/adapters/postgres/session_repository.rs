//! PostgreSQL implementation of SessionRepository.
//!
//! Persists workout sessions to the `sessions` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &NewSession) -> Result<Session, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (name, date)
            VALUES ($1, $2)
            RETURNING id, name, date
            "#,
        )
        .bind(&session.name)
        .bind(session.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        row_to_session(row)
    }

    async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, date
            FROM sessions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<Session, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;

    // Both columns are nullable; a NULL must not fail the whole listing.
    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;

    let date: Option<NaiveDate> = row
        .try_get("date")
        .map_err(|e| DomainError::database("Failed to get date", e))?;

    Ok(Session::reconstitute(SessionId::from_i64(id), name, date))
}
