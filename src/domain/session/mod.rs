//! Session domain module.
//!
//! A workout session is a name and a date. Sessions are created and listed;
//! nothing else happens to them.

mod aggregate;
mod errors;

pub use aggregate::{NewSession, Session};
pub use errors::SessionError;
