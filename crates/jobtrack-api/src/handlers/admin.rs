//! Admin-only handlers: job creation and application decisions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use jobtrack_entity::application::ApplicationDetails;

use crate::dto::{ApiResponse, ApplicationResponse, CreateJobRequest, JobResponse, UpdateStatusRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate;
use crate::state::AppState;

/// `POST /api/admin/jobs`
pub async fn create_job(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JobResponse>>), ApiError> {
    validate(&request)?;

    let job = state
        .catalog_service
        .create_job(&ctx, &request.title, &request.description)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job.into()))))
}

/// `GET /api/admin/applications`
///
/// Lists every application with applicant name, email, and job title.
pub async fn list_applications(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<Vec<ApplicationDetails>>>, ApiError> {
    let applications = state.workflow_service.list_all(&ctx).await?;
    Ok(Json(ApiResponse::ok(applications)))
}

/// `PUT /api/admin/applications/{id}/status`
///
/// Decides a pending application. Decisions are terminal: a second
/// decision, or an attempt to move anything back to pending, gets 409.
pub async fn set_status(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(application_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<ApplicationResponse>>, ApiError> {
    let application = state
        .workflow_service
        .set_status(&ctx, application_id, request.status)
        .await?;

    Ok(Json(ApiResponse::ok(application.into())))
}
