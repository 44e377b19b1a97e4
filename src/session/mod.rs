//! Session state and the line-driven runner
//!
//! A [`Session`] owns the single parking lot of one interpreter run. The
//! [`SessionRunner`] feeds it lines from any reader until `exit`, end of
//! input, or the first fatal error.

pub mod runner;
mod state;

pub use runner::{SessionRunner, SessionSummary};
pub use state::Session;
