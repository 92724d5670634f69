//! Student-facing application handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use jobtrack_entity::application::ApplicationWithJob;

use crate::dto::{ApiResponse, ApplicationResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /api/jobs/{id}/apply`
///
/// Student-only. Fails 404 for a missing job and 409 when the student
/// has already applied to it.
pub async fn apply(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationResponse>>), ApiError> {
    let application = state.workflow_service.apply(&ctx, job_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(application.into())),
    ))
}

/// `GET /api/applications`
///
/// Lists the current student's applications, each joined with its job
/// posting so the caller needs no second request.
pub async fn list_own(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<Vec<ApplicationWithJob>>>, ApiError> {
    let applications = state.workflow_service.list_own(&ctx).await?;
    Ok(Json(ApiResponse::ok(applications)))
}
