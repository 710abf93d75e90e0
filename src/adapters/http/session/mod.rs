//! HTTP adapter for workout session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateSessionRequest, ErrorResponse, SessionResponse};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
