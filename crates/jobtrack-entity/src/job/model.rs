//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An admin-authored job listing students may apply to.
///
/// Postings are append-only: there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    /// Unique posting identifier.
    pub id: Uuid,
    /// Posting title. Not unique.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// The admin who created this posting.
    pub created_by: Uuid,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobPosting {
    /// Posting title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// The authoring admin's account ID.
    pub created_by: Uuid,
}
