//! Repository implementations, one per entity.

pub mod account;
pub mod application;
pub mod job;
pub mod session;

pub use account::AccountRepository;
pub use application::ApplicationRepository;
pub use job::JobRepository;
pub use session::SessionRepository;
