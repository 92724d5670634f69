//! Application repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jobtrack_core::error::{AppError, ErrorKind};
use jobtrack_core::result::AppResult;
use jobtrack_entity::application::{
    Application, ApplicationDetails, ApplicationStatus, ApplicationWithJob,
};

/// Repository for the application workflow.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an application by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application by id", e)
            })
    }

    /// Create a new application in the default `pending` state.
    ///
    /// The `(account_id, job_id)` unique constraint is the canonical
    /// duplicate signal; there is no racy pre-check. A foreign-key
    /// violation on `job_id` means the posting vanished between the
    /// catalog lookup and this insert.
    pub async fn create(&self, account_id: Uuid, job_id: Uuid) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications (account_id, job_id) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(account_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("applications_account_id_job_id_key") =>
            {
                AppError::already_applied("You have already applied for this job")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("applications_job_id_fkey") =>
            {
                AppError::not_found(format!("Job posting {job_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create application", e),
        })
    }

    /// List one student's applications joined with job data.
    pub async fn find_by_account(&self, account_id: Uuid) -> AppResult<Vec<ApplicationWithJob>> {
        sqlx::query_as::<_, ApplicationWithJob>(
            "SELECT a.id, a.job_id, j.title AS job_title, \
                    j.description AS job_description, a.status, \
                    a.submitted_at, a.decided_at \
             FROM applications a \
             JOIN jobs j ON j.id = a.job_id \
             WHERE a.account_id = $1 \
             ORDER BY a.submitted_at",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
        })
    }

    /// List every application joined with applicant and job data.
    pub async fn find_all_detailed(&self) -> AppResult<Vec<ApplicationDetails>> {
        sqlx::query_as::<_, ApplicationDetails>(
            "SELECT a.id, a.account_id, u.name AS applicant_name, \
                    u.email AS applicant_email, a.job_id, j.title AS job_title, \
                    a.status, a.submitted_at, a.decided_at \
             FROM applications a \
             JOIN accounts u ON u.id = a.account_id \
             JOIN jobs j ON j.id = a.job_id \
             ORDER BY a.submitted_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list all applications", e)
        })
    }

    /// Decide a pending application and stamp the decision time.
    ///
    /// The `status = 'pending'` guard makes the decision atomic: of two
    /// concurrent decisions only one matches the row, the other falls
    /// through to the re-read and fails. Callers pass a terminal target
    /// status; the workflow service rejects `pending` before calling.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> AppResult<Application> {
        let updated = sqlx::query_as::<_, Application>(
            "UPDATE applications SET status = $2, decided_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update application status", e)
        })?;

        match updated {
            Some(application) => Ok(application),
            // Zero rows matched: missing id or an already decided row.
            None => match self.find_by_id(id).await? {
                Some(existing) => Err(AppError::conflict(format!(
                    "Cannot move application from '{}' to '{}'",
                    existing.status, status
                ))),
                None => Err(AppError::not_found(format!("Application {id} not found"))),
            },
        }
    }
}
