//! Identity operations.

pub mod service;

pub use service::IdentityService;
