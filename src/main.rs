//! Jobtrack server entry point.
//!
//! Wires configuration, database, auth, services, and the HTTP API
//! together and runs the Axum server until shutdown.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use jobtrack_api::state::AppState;
use jobtrack_auth::jwt::{JwtDecoder, JwtEncoder};
use jobtrack_auth::password::PasswordHasher;
use jobtrack_auth::session::SessionManager;
use jobtrack_core::config::AppConfig;
use jobtrack_core::error::AppError;
use jobtrack_database::repositories::account::AccountRepository;
use jobtrack_database::repositories::application::ApplicationRepository;
use jobtrack_database::repositories::job::JobRepository;
use jobtrack_database::repositories::session::SessionRepository;
use jobtrack_service::catalog::CatalogService;
use jobtrack_service::identity::IdentityService;
use jobtrack_service::workflow::WorkflowService;

#[tokio::main]
async fn main() {
    let env = std::env::var("JOBTRACK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(err) = run(config).await {
        tracing::error!("Server error: {err}");
        std::process::exit(1);
    }
}

/// Initialize tracing output from the logging config.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Jobtrack v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = jobtrack_database::connect(&config.database).await?;
    jobtrack_database::run_migrations(&db_pool).await?;

    // Repositories
    let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));
    let application_repo = Arc::new(ApplicationRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));

    // Auth
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&account_repo),
        Arc::clone(&session_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        config.auth.clone(),
    ));

    // Services
    let identity_service = Arc::new(IdentityService::new(
        Arc::clone(&account_repo),
        Arc::clone(&password_hasher),
    ));
    let catalog_service = Arc::new(CatalogService::new(Arc::clone(&job_repo)));
    let workflow_service = Arc::new(WorkflowService::new(
        Arc::clone(&application_repo),
        Arc::clone(&job_repo),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        jwt_decoder,
        session_manager,
        account_repo,
        identity_service,
        catalog_service,
        workflow_service,
    };

    let app = jobtrack_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| AppError::internal(format!("Failed to bind {addr}: {err}")))?;

    tracing::info!("Jobtrack listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::internal(format!("Server error: {err}")))?;

    tracing::info!("Jobtrack shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("Failed to install SIGTERM handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
