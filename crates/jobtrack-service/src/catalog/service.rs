//! Job catalog: admin-writable, readable by any authenticated account.

use std::sync::Arc;

use tracing::info;

use jobtrack_core::error::AppError;
use jobtrack_database::repositories::job::JobRepository;
use jobtrack_entity::job::JobPosting;
use jobtrack_entity::job::model::CreateJobPosting;

use crate::context::RequestContext;

/// Handles the append-only job catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Job repository.
    job_repo: Arc<JobRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(job_repo: Arc<JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Creates a job posting. Admin-only.
    ///
    /// Titles are not unique; postings are never updated or deleted.
    pub async fn create_job(
        &self,
        ctx: &RequestContext,
        title: &str,
        description: &str,
    ) -> Result<JobPosting, AppError> {
        ctx.require_admin()?;

        if title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(AppError::validation("Description cannot be empty"));
        }

        let job = self
            .job_repo
            .create(&CreateJobPosting {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                created_by: ctx.account_id,
            })
            .await?;

        info!(job_id = %job.id, admin_id = %ctx.account_id, "Job posting created");

        Ok(job)
    }

    /// Lists every job posting. Visible to any authenticated account.
    pub async fn list_jobs(&self, _ctx: &RequestContext) -> Result<Vec<JobPosting>, AppError> {
        self.job_repo.find_all().await
    }
}
