//! Job posting domain entities.

pub mod model;

pub use model::JobPosting;
