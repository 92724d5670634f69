//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobtrack_core::error::AppError;
use jobtrack_entity::account::AccountRole;

/// Context for the current authenticated request.
///
/// Extracted at the request boundary and passed into service methods so
/// that every operation knows *who* is acting and from *which* session.
/// A `RequestContext` only exists for authenticated requests; the
/// "no principal" case is rejected earlier with `Unauthenticated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The account's role at the time the token was issued.
    pub role: AccountRole,
    /// Display name (convenience field from the token claims).
    pub name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, session_id: Uuid, role: AccountRole, name: String) -> Self {
        Self {
            account_id,
            session_id,
            role,
            name,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Guard: fails with `Forbidden` unless the principal holds `role`.
    pub fn require_role(&self, role: AccountRole) -> Result<(), AppError> {
        if self.role != role {
            return Err(AppError::forbidden(format!("{role} access required")));
        }
        Ok(())
    }

    /// Guard: fails with `Forbidden` unless the principal is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        self.require_role(AccountRole::Admin)
    }

    /// Guard: fails with `Forbidden` unless the principal is a student.
    pub fn require_student(&self) -> Result<(), AppError> {
        self.require_role(AccountRole::Student)
    }
}
