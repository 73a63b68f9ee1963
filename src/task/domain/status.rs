//! The closed workflow status domain and its display metadata.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// The set is closed: every task holds exactly one of these five values and
/// external data resolving to anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is awaiting review.
    UnderReview,
    /// Work is temporarily paused.
    OnHold,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Every status in canonical board display order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InProgress,
        Self::UnderReview,
        Self::OnHold,
        Self::Completed,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::UnderReview => "under_review",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
        }
    }

    /// Returns the human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::UnderReview => "Under Review",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }

    /// Returns the presentation color classes for the status badge.
    ///
    /// Presentation metadata only; no business logic keys off this value.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Pending => "bg-gray-100 text-gray-700",
            Self::InProgress => "bg-blue-100 text-blue-700",
            Self::UnderReview => "bg-purple-100 text-purple-700",
            Self::OnHold => "bg-yellow-100 text-yellow-700",
            Self::Completed => "bg-green-100 text-green-700",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "under_review" => Ok(Self::UnderReview),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
