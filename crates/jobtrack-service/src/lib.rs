//! # jobtrack-service
//!
//! Business logic services for Jobtrack. Each service receives an
//! explicit [`context::RequestContext`] naming the authenticated
//! principal; nothing reads ambient session state.

pub mod catalog;
pub mod context;
pub mod identity;
pub mod workflow;

pub use catalog::CatalogService;
pub use context::RequestContext;
pub use identity::IdentityService;
pub use workflow::WorkflowService;
