//! Application workflow: apply, list, and decide applications.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobtrack_core::error::AppError;
use jobtrack_database::repositories::application::ApplicationRepository;
use jobtrack_database::repositories::job::JobRepository;
use jobtrack_entity::application::{
    Application, ApplicationDetails, ApplicationStatus, ApplicationWithJob,
};

use crate::context::RequestContext;

/// Handles the application status workflow.
///
/// Students create applications; admins decide them. An application is
/// decided at most once: `Accepted` and `Rejected` are terminal.
#[derive(Debug, Clone)]
pub struct WorkflowService {
    /// Application repository.
    application_repo: Arc<ApplicationRepository>,
    /// Job repository, for existence checks before applying.
    job_repo: Arc<JobRepository>,
}

impl WorkflowService {
    /// Creates a new workflow service.
    pub fn new(application_repo: Arc<ApplicationRepository>, job_repo: Arc<JobRepository>) -> Self {
        Self {
            application_repo,
            job_repo,
        }
    }

    /// Submits an application for a job. Student-only.
    ///
    /// The job must exist; a second application for the same job fails
    /// with `AlreadyApplied` via the database unique constraint, so two
    /// concurrent submissions cannot both succeed.
    pub async fn apply(&self, ctx: &RequestContext, job_id: Uuid) -> Result<Application, AppError> {
        ctx.require_student()?;

        self.job_repo
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Job posting {job_id} not found")))?;

        let application = self.application_repo.create(ctx.account_id, job_id).await?;

        info!(
            application_id = %application.id,
            account_id = %ctx.account_id,
            job_id = %job_id,
            "Application submitted"
        );

        Ok(application)
    }

    /// Lists the current student's applications with job data.
    pub async fn list_own(&self, ctx: &RequestContext) -> Result<Vec<ApplicationWithJob>, AppError> {
        ctx.require_student()?;
        self.application_repo.find_by_account(ctx.account_id).await
    }

    /// Lists every application with applicant and job data. Admin-only.
    pub async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<ApplicationDetails>, AppError> {
        ctx.require_admin()?;
        self.application_repo.find_all_detailed().await
    }

    /// Decides an application. Admin-only.
    ///
    /// Fails with `NotFound` for a missing id and `Conflict` for an
    /// illegal transition (the application was already decided, or the
    /// target status is `Pending`).
    pub async fn set_status(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
        new_status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        ctx.require_admin()?;

        let application = self
            .application_repo
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Application {application_id} not found"))
            })?;

        if !application.status.can_transition_to(new_status) {
            return Err(AppError::conflict(format!(
                "Cannot move application from '{}' to '{}'",
                application.status, new_status
            )));
        }

        let updated = self
            .application_repo
            .update_status(application_id, new_status)
            .await?;

        info!(
            application_id = %application_id,
            admin_id = %ctx.account_id,
            status = %new_status,
            "Application decided"
        );

        Ok(updated)
    }
}
