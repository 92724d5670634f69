//! Joined read models for application listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// An application joined with its job posting, for student listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithJob {
    /// Application identifier.
    pub id: Uuid,
    /// The job posting applied to.
    pub job_id: Uuid,
    /// Job title.
    pub job_title: String,
    /// Job description.
    pub job_description: String,
    /// Current workflow status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the application was decided, if it has been.
    pub decided_at: Option<DateTime<Utc>>,
}

/// An application joined with both applicant and job, for admin review.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationDetails {
    /// Application identifier.
    pub id: Uuid,
    /// The applying account.
    pub account_id: Uuid,
    /// Applicant display name.
    pub applicant_name: String,
    /// Applicant email.
    pub applicant_email: String,
    /// The job posting applied to.
    pub job_id: Uuid,
    /// Job title.
    pub job_title: String,
    /// Current workflow status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the application was decided, if it has been.
    pub decided_at: Option<DateTime<Utc>>,
}
