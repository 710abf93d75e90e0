//! Session repository port.
//!
//! Defines the contract for storing and listing workout sessions.
//! Implementations handle the actual storage operations.

use crate::domain::foundation::DomainError;
use crate::domain::session::{NewSession, Session};
use async_trait::async_trait;

/// Repository port for workout session persistence.
///
/// Storage failures are returned as `DatabaseError` and are not retried.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a new session.
    ///
    /// Returns the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &NewSession) -> Result<Session, DomainError>;

    /// Return every stored session.
    async fn find_all(&self) -> Result<Vec<Session>, DomainError>;
}
