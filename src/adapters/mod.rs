//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `postgres` - sqlx-backed session storage
//! - `memory` - in-memory session storage (tests, development)

pub mod http;
pub mod memory;
pub mod postgres;

pub use self::http::build_router;
pub use memory::InMemorySessionRepository;
pub use postgres::PostgresSessionRepository;
