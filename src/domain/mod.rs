//! Domain layer containing workout types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `session` - Workout session entity

pub mod foundation;
pub mod session;
