//! # jobtrack-api
//!
//! HTTP API layer for Jobtrack built on Axum.
//!
//! Provides all REST endpoints, the `AuthUser` extractor, role guards,
//! DTOs, and the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
