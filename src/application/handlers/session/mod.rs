//! Session command and query handlers.

mod create_session;
mod list_sessions;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use list_sessions::ListSessionsHandler;
