//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations over the ports. Command handlers (write)
//! are kept apart from query handlers (read).

pub mod handlers;

pub use handlers::session::{CreateSessionCommand, CreateSessionHandler, ListSessionsHandler};
