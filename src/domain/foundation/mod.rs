//! Foundation module - Shared domain primitives.
//!
//! Identifiers and error types used across the workout domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::SessionId;
