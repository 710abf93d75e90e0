//! CreateSessionHandler - Command handler for recording a workout session.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::session::{NewSession, Session, SessionError};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub name: String,
    pub date: NaiveDate,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Persist the session and return it with its assigned id.
    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, SessionError> {
        let new_session = NewSession::new(cmd.name, cmd.date);
        let date = new_session.date;

        let session = self.repository.save(&new_session).await.map_err(|e| {
            tracing::error!(error = %e, "failed to save session");
            SessionError::from(e)
        })?;

        tracing::info!(
            session_id = %session.id(),
            date = %date,
            "session created"
        );

        Ok(session)
    }
}
