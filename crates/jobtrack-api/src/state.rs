//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use jobtrack_auth::jwt::JwtDecoder;
use jobtrack_auth::session::SessionManager;
use jobtrack_core::config::AppConfig;
use jobtrack_database::repositories::account::AccountRepository;
use jobtrack_service::catalog::CatalogService;
use jobtrack_service::identity::IdentityService;
use jobtrack_service::workflow::WorkflowService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health probe).
    pub db_pool: PgPool,
    /// Session token decoder.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// Account lookups for the `/auth/me` endpoint.
    pub account_repo: Arc<AccountRepository>,
    /// Registration service.
    pub identity_service: Arc<IdentityService>,
    /// Job catalog service.
    pub catalog_service: Arc<CatalogService>,
    /// Application workflow service.
    pub workflow_service: Arc<WorkflowService>,
}
