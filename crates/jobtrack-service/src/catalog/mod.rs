//! Job catalog operations.

pub mod service;

pub use service::CatalogService;
