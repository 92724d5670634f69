//! Job catalog handlers for authenticated accounts.

use axum::Json;
use axum::extract::State;

use crate::dto::{ApiResponse, JobResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `GET /api/jobs`
///
/// Lists all job postings in creation order. Visible to any
/// authenticated account, student or admin.
pub async fn list_jobs(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    let jobs = state.catalog_service.list_jobs(&ctx).await?;
    let jobs = jobs.into_iter().map(JobResponse::from).collect();
    Ok(Json(ApiResponse::ok(jobs)))
}
