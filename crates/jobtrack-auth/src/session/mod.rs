//! Session lifecycle.

pub mod manager;

pub use manager::{LoginResult, SessionManager};
