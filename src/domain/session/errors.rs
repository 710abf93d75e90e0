//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors surfaced by the session command and query handlers.
///
/// Storage is the only thing that can fail, so there is a single variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: SessionError = DomainError::new(ErrorCode::DatabaseError, "down").into();
        assert_eq!(err, SessionError::infrastructure("[DATABASE_ERROR] down"));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn display_uses_message() {
        let err = SessionError::infrastructure("pool closed");
        assert_eq!(err.to_string(), "Error: pool closed");
    }
}
