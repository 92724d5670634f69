//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::AccountRole;

/// A registered account in the Jobtrack system.
///
/// Accounts are append-only: nothing updates or deletes them once
/// registered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Human-readable display name.
    pub name: String,
    /// Unique email address, stored lowercased.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role deciding which routes the account may reach.
    pub role: AccountRole,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Display name.
    pub name: String,
    /// Email address (already lowercased by the caller).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: AccountRole,
}
