//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// `GET /api/health`
///
/// Always returns 200; a broken database shows up as `degraded` in the
/// body rather than an error, so load balancers can tell the process is
/// alive even when Postgres is not.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "connected",
        Err(err) => {
            tracing::warn!(error = %err, "Database health probe failed");
            "unreachable"
        }
    };

    let status = if database == "connected" { "ok" } else { "degraded" };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}
