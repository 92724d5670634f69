//! Application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// A student's request to be considered for a job posting.
///
/// At most one application exists per (account, job) pair: enforced by
/// a database unique constraint, not an in-process pre-check.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// The applying account.
    pub account_id: Uuid,
    /// The job posting applied to.
    pub job_id: Uuid,
    /// Current workflow status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the application left `Pending`, if it has.
    pub decided_at: Option<DateTime<Utc>>,
}

impl Application {
    /// Whether an admin can still decide this application.
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }
}
