//! Request DTOs with validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobtrack_entity::account::AccountRole;
use jobtrack_entity::application::ApplicationStatus;

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Email address, unique per account.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
    /// Account role, `student` or `admin`.
    pub role: AccountRole,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Job posting creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Job title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Job description.
    #[validate(length(min = 1, max = 10_000, message = "Description must be 1-10000 characters"))]
    pub description: String,
}

/// Application decision request.
///
/// `status` deserializes through the closed status enum, so anything
/// other than `pending`, `accepted`, or `rejected` is rejected before
/// the handler runs. Setting `pending` fails later as an illegal
/// transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status.
    pub status: ApplicationStatus,
}
