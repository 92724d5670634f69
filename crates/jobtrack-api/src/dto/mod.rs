//! Request and response data transfer objects.

pub mod request;
pub mod response;

pub use request::{CreateJobRequest, LoginRequest, RegisterRequest, UpdateStatusRequest};
pub use response::{
    AccountResponse, ApiResponse, ApplicationResponse, HealthResponse, JobResponse, LoginResponse,
    MessageResponse,
};
