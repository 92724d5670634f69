//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A signed-in browser session for an account.
///
/// Created at login, revoked at logout. Tokens referencing a revoked or
/// expired session are rejected at the request boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (the `sid` claim in issued tokens).
    pub id: Uuid,
    /// The signed-in account.
    pub account_id: Uuid,
    /// When the session was started.
    pub created_at: DateTime<Utc>,
    /// When the session expires regardless of activity.
    pub expires_at: DateTime<Utc>,
    /// When the session was explicitly ended, if it was.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the session can still authenticate requests.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }
}
