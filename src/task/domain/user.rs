//! User references carried by activity records and notes.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Reference to a user account as reported by the remote authority.
///
/// The engine never manages accounts; it only carries the identity attached
/// to activity records, notes, and the acting session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    id: UserId,
    name: String,
    email: String,
}

impl UserRef {
    /// Creates a user reference.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
