//! Application status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an application.
///
/// The legacy system stored status as free text; this model closes it
/// to a fixed set. An application starts `Pending` and is decided once:
/// `Accepted` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, awaiting an admin decision.
    Pending,
    /// Decided favorably. Terminal.
    Accepted,
    /// Decided unfavorably. Terminal.
    Rejected,
}

impl ApplicationStatus {
    /// Whether this status can never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Whether moving from `self` to `target` is a legal transition.
    ///
    /// The only legal moves are `Pending → Accepted` and
    /// `Pending → Rejected`.
    pub fn can_transition_to(&self, target: ApplicationStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Rejected)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = jobtrack_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(jobtrack_core::AppError::validation(format!(
                "Invalid application status: '{s}'. Expected one of: pending, accepted, rejected"
            ))),
        }
    }
}
