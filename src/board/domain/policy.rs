//! Authorization policy for board-mutating actions.

use crate::task::domain::UserId;
use serde::{Deserialize, Serialize};

/// Reference to a project's single manager.
///
/// Supplied by the project-fetch subsystem; the engine only ever compares
/// it against the acting user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRef(UserId);

impl ManagerRef {
    /// Creates a manager reference.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self(id)
    }

    /// Returns the manager's user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.0
    }
}

/// Reports whether the acting user is the project's manager.
///
/// Pure and total: equality is by identity reference, and an absent user is
/// simply not the manager.
#[must_use]
pub fn is_manager(manager: &ManagerRef, user: Option<&UserId>) -> bool {
    user.is_some_and(|id| manager.id() == id)
}
