//! Job posting repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jobtrack_core::error::{AppError, ErrorKind};
use jobtrack_core::result::AppResult;
use jobtrack_entity::job::JobPosting;
use jobtrack_entity::job::model::CreateJobPosting;

/// Repository for the append-only job catalog.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a posting by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobPosting>> {
        sqlx::query_as::<_, JobPosting>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    /// List all postings in storage order.
    pub async fn find_all(&self) -> AppResult<Vec<JobPosting>> {
        sqlx::query_as::<_, JobPosting>("SELECT * FROM jobs ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    /// Create a new posting.
    pub async fn create(&self, data: &CreateJobPosting) -> AppResult<JobPosting> {
        sqlx::query_as::<_, JobPosting>(
            "INSERT INTO jobs (title, description, created_by) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }
}
