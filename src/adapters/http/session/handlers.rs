//! HTTP handlers for workout endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, ListSessionsHandler,
};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

use super::dto::{CreateSessionRequest, ErrorResponse, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
        }
    }

    /// Wire both handlers to the same repository.
    pub fn from_repository(repository: Arc<dyn SessionRepository>) -> Self {
        Self::new(
            Arc::new(CreateSessionHandler::new(repository.clone())),
            Arc::new(ListSessionsHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/workouts - Record a workout session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let cmd = CreateSessionCommand {
        name: req.name,
        date: req.date,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(session) => {
            let response: SessionResponse = session.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/workouts - List every workout session
pub async fn list_sessions(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(sessions) => {
            let response: Vec<SessionResponse> = sessions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::Infrastructure(ref detail) => {
            tracing::error!(
                code = %error.code(),
                status = StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                detail = %detail,
                "workout request failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn infrastructure_error_maps_to_500() {
        let error = SessionError::infrastructure("connection reset");
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn infrastructure_error_body_hides_driver_text() {
        let error = SessionError::infrastructure(
            "Failed to insert session: error communicating with database: connection reset",
        );
        let response = handle_session_error(error);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "Internal server error");
        assert!(!String::from_utf8_lossy(&bytes).contains("connection reset"));
    }
}
