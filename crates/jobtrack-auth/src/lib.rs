//! # jobtrack-auth
//!
//! Authentication building blocks for Jobtrack.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: session token creation and validation
//! - `session`: session lifecycle management (login, validate, logout)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionManager;
