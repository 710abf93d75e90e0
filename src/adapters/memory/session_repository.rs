//! In-memory session repository.
//!
//! Keeps sessions in insertion order and hands out ids from a counter,
//! the same way an identity column would. Useful for tests and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionRepository;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Session>,
    last_id: i64,
}

/// In-memory storage for workout sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &NewSession) -> Result<Session, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let stored = Session::from_new(SessionId::from_i64(table.last_id), session.clone());
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
        Ok(self.table.read().await.rows.clone())
    }
}
