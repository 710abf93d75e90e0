//! ListSessionsHandler - Query handler returning every stored session.

use std::sync::Arc;

use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Handler for listing sessions. No filtering or pagination.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Session>, SessionError> {
        let sessions = self.repository.find_all().await?;
        tracing::debug!(count = sessions.len(), "listed sessions");
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
    use crate::domain::session::NewSession;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StaticRepository {
        sessions: Vec<Session>,
    }

    #[async_trait]
    impl SessionRepository for StaticRepository {
        async fn save(&self, _session: &NewSession) -> Result<Session, DomainError> {
            unimplemented!()
        }

        async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
            Ok(self.sessions.clone())
        }
    }

    struct UnavailableRepository;

    #[async_trait]
    impl SessionRepository for UnavailableRepository {
        async fn save(&self, _session: &NewSession) -> Result<Session, DomainError> {
            unimplemented!()
        }

        async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListSessionsHandler::new(Arc::new(StaticRepository { sessions: vec![] }));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn returns_everything_the_repository_holds() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9);
        let sessions = vec![
            Session::reconstitute(SessionId::from_i64(1), Some("Push".to_string()), date),
            Session::reconstitute(SessionId::from_i64(2), Some("Pull".to_string()), date),
        ];
        let handler = ListSessionsHandler::new(Arc::new(StaticRepository {
            sessions: sessions.clone(),
        }));

        assert_eq!(handler.handle().await.unwrap(), sessions);
    }

    #[tokio::test]
    async fn storage_failure_is_not_swallowed() {
        let handler = ListSessionsHandler::new(Arc::new(UnavailableRepository));
        let err = handler.handle().await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
