//! Session lifecycle manager: login, validation, logout.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use jobtrack_core::config::AuthConfig;
use jobtrack_core::error::AppError;
use jobtrack_database::repositories::account::AccountRepository;
use jobtrack_database::repositories::session::SessionRepository;
use jobtrack_entity::account::Account;
use jobtrack_entity::session::Session;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Signed session token.
    pub token: String,
    /// Token and session expiration.
    pub expires_at: chrono::DateTime<Utc>,
    /// Created session.
    pub session: Session,
    /// The authenticated account.
    pub account: Account,
}

/// Manages the complete session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Account lookups for credential checks.
    account_repo: Arc<AccountRepository>,
    /// Session persistence.
    session_repo: Arc<SessionRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// Auth configuration.
    auth_config: AuthConfig,
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        account_repo: Arc<AccountRepository>,
        session_repo: Arc<SessionRepository>,
        password_hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            account_repo,
            session_repo,
            password_hasher,
            jwt_encoder,
            auth_config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Find the account by email
    /// 2. Verify the password hash
    /// 3. Create a session row
    /// 4. Issue a signed token
    ///
    /// Unknown email and wrong password produce the same
    /// `InvalidCredentials` error, so callers cannot enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let account = self
            .account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &account.password_hash)?;

        if !password_valid {
            return Err(AppError::invalid_credentials());
        }

        let expires_at =
            Utc::now() + Duration::minutes(self.auth_config.token_ttl_minutes as i64);
        let session = self.session_repo.create(account.id, expires_at).await?;

        let (token, expires_at) = self.jwt_encoder.generate_token(&account, &session)?;

        info!(account_id = %account.id, session_id = %session.id, role = %account.role, "Login");

        Ok(LoginResult {
            token,
            expires_at,
            session,
            account,
        })
    }

    /// Checks that a session referenced by a token is still live.
    pub async fn validate_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Session not found"))?;

        if !session.is_active(Utc::now()) {
            return Err(AppError::unauthenticated("Session expired or revoked"));
        }

        Ok(session)
    }

    /// Ends a session so its tokens stop authenticating requests.
    pub async fn logout(&self, session_id: Uuid) -> Result<(), AppError> {
        self.session_repo.revoke(session_id).await?;
        info!(session_id = %session_id, "Logout");
        Ok(())
    }
}
