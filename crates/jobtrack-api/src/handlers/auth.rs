//! Authentication handlers: register, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use jobtrack_core::error::AppError;

use crate::dto::{AccountResponse, ApiResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate;
use crate::state::AppState;

/// `POST /api/auth/register`
///
/// Open endpoint. A duplicate email fails with 409 regardless of how
/// close together two registrations land.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponse>>), ApiError> {
    validate(&request)?;

    let account = state
        .identity_service
        .register(&request.name, &request.email, &request.password, request.role)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(account.into()))))
}

/// `POST /api/auth/login`
///
/// Unknown email and wrong password are indistinguishable to the
/// caller; both return 401.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate(&request)?;

    let result = state
        .session_manager
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(ApiResponse::ok(result.into())))
}

/// `POST /api/auth/logout`
///
/// Revokes the current session. Tokens minted for it stop working
/// immediately, even before their `exp` claim.
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.logout(ctx.session_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Logged out"))))
}

/// `GET /api/auth/me`
pub async fn me(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = state
        .account_repo
        .find_by_id(ctx.account_id)
        .await?
        .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?;

    Ok(Json(ApiResponse::ok(account.into())))
}
