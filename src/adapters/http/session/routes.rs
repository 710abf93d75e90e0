//! HTTP routes for workout endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_session, list_sessions, SessionHandlers};

/// Creates the workout router.
///
/// Routes:
/// - `POST /api/workouts` - Record a session
/// - `GET /api/workouts` - List all sessions
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/api/workouts", get(list_sessions).post(create_session))
        .with_state(handlers)
}
