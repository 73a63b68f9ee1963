//! Status-change activity records.

use super::{ActivityId, TaskStatus, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a task's activity timeline.
///
/// Created by the remote authority once per status transition and never
/// mutated or deleted afterwards. The creation instant lives inside the
/// identifier, so the record itself carries no timestamp field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: ActivityId,
    user: UserRef,
    status: TaskStatus,
}

impl ActivityRecord {
    /// Creates an activity record.
    #[must_use]
    pub const fn new(id: ActivityId, user: UserRef, status: TaskStatus) -> Self {
        Self { id, user, status }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &ActivityId {
        &self.id
    }

    /// Returns the user who performed the transition.
    #[must_use]
    pub const fn user(&self) -> &UserRef {
        &self.user
    }

    /// Returns the status the task transitioned into.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the instant the transition was recorded.
    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }
}
