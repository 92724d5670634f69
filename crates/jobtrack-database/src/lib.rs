//! # jobtrack-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Jobtrack entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::connect;
pub use migration::run_migrations;
