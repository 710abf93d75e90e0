//! Fizik - Workout Session Tracking Backend
//!
//! Records workout sessions (a name and a date) and lists them back over
//! a small JSON API backed by PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
