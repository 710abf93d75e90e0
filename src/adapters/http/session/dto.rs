//! HTTP DTOs for workout endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::session::Session;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record a workout session.
///
/// Unknown fields, including a client-supplied `id`, are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub date: NaiveDate,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored workout session. Empty columns serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: i64,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id().as_i64(),
            name: session.name().map(str::to_string),
            date: session.date(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Generic 500 body. Storage details stay in the server log.
    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;

    #[test]
    fn create_request_deserializes() {
        let json = r#"{"name": "Leg Day", "date": "2024-01-01"}"#;
        let req: CreateSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Leg Day");
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn create_request_ignores_client_id() {
        let json = r#"{"id": 999, "name": "Leg Day", "date": "2024-01-01"}"#;
        assert!(serde_json::from_str::<CreateSessionRequest>(json).is_ok());
    }

    #[test]
    fn create_request_requires_name_and_date() {
        assert!(serde_json::from_str::<CreateSessionRequest>(r#"{"name": "x"}"#).is_err());
        assert!(serde_json::from_str::<CreateSessionRequest>(r#"{"date": "2024-01-01"}"#).is_err());
        assert!(
            serde_json::from_str::<CreateSessionRequest>(r#"{"name": "x", "date": "01/01/2024"}"#)
                .is_err()
        );
    }

    #[test]
    fn session_response_serializes_date_as_iso() {
        let session = Session::reconstitute(
            SessionId::from_i64(3),
            Some("Leg Day".to_string()),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        );
        let value = serde_json::to_value(SessionResponse::from(session)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "name": "Leg Day", "date": "2024-01-01"})
        );
    }

    #[test]
    fn session_with_empty_columns_serializes_nulls() {
        let session = Session::reconstitute(SessionId::from_i64(4), None, None);
        let value = serde_json::to_value(SessionResponse::from(session)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 4, "name": null, "date": null})
        );
    }

    #[test]
    fn error_response_internal_creates_correctly() {
        let error = ErrorResponse::internal();
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, "Internal server error");
    }
}
