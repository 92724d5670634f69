//! Account registration.

use std::sync::Arc;

use tracing::info;

use jobtrack_auth::password::PasswordHasher;
use jobtrack_core::error::AppError;
use jobtrack_database::repositories::account::AccountRepository;
use jobtrack_entity::account::model::CreateAccount;
use jobtrack_entity::account::{Account, AccountRole};

/// Handles account registration.
///
/// Login and logout live in `jobtrack_auth::SessionManager`; this
/// service only covers the unauthenticated registration path.
#[derive(Debug, Clone)]
pub struct IdentityService {
    /// Account repository.
    account_repo: Arc<AccountRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(account_repo: Arc<AccountRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            account_repo,
            hasher,
        }
    }

    /// Registers a new account.
    ///
    /// The email is normalized to lowercase before storage; the
    /// `accounts_email_key` constraint turns a duplicate into
    /// `DuplicateEmail` rather than a pre-check race.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: AccountRole,
    ) -> Result<Account, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        let email = email.trim().to_lowercase();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        if password.len() < 8 {
            return Err(AppError::validation(
                "Password must be at least 8 characters",
            ));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let account = self
            .account_repo
            .create(&CreateAccount {
                name: name.trim().to_string(),
                email,
                password_hash,
                role,
            })
            .await?;

        info!(account_id = %account.id, role = %account.role, "Account registered");

        Ok(account)
    }
}
