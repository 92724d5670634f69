//! HTTP request handlers.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod health;
pub mod jobs;

use validator::Validate;

use jobtrack_core::error::AppError;

use crate::error::ApiError;

/// Runs declarative validation on a request DTO.
pub(crate) fn validate<T: Validate>(request: &T) -> Result<(), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError(AppError::validation(errors.to_string())))
}
