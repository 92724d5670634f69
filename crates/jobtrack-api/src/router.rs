//! Route table.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/me", get(handlers::auth::me));

    let admin_routes = Router::new()
        .route("/jobs", post(handlers::admin::create_job))
        .route("/applications", get(handlers::admin::list_applications))
        .route(
            "/applications/{id}/status",
            put(handlers::admin::set_status),
        );

    let api_routes = Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/auth", auth_routes)
        .route("/jobs", get(handlers::jobs::list_jobs))
        .route("/jobs/{id}/apply", post(handlers::applications::apply))
        .route("/applications", get(handlers::applications::list_own))
        .nest("/admin", admin_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
