//! Validated identifier types for the task domain.
//!
//! Every remote identifier is a 24-character lowercase hexadecimal object id
//! whose first four bytes encode the creation instant as big-endian seconds.
//! Each entity gets its own newtype so a status column id can never stand in
//! for a task id (and vice versa) once past the boundary.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire length of a remote object id.
const OBJECT_ID_LEN: usize = 24;

/// Hex digits encoding the embedded creation seconds.
const TIMESTAMP_HEX_LEN: usize = 8;

/// Normalizes and validates a raw object id.
fn validate_object_id(raw: &str) -> Result<String, TaskDomainError> {
    let normalized = raw.trim().to_ascii_lowercase();
    if normalized.len() != OBJECT_ID_LEN || !normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TaskDomainError::InvalidObjectId(raw.to_owned()));
    }
    Ok(normalized)
}

/// Builds a wire-format object id embedding the given creation instant.
///
/// Used by the in-memory remote authority when minting new entities; the
/// entropy tail keeps ids unique within a second.
pub(crate) fn generate_object_id(created_at: DateTime<Utc>, entropy: Uuid) -> String {
    let seconds = u32::try_from(created_at.timestamp() & i64::from(u32::MAX)).unwrap_or_default();
    let (tail, _) = entropy.as_u64_pair();
    format!("{seconds:08x}{tail:016x}")
}

macro_rules! object_id_type {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier from its wire form.
            ///
            /// # Errors
            ///
            /// Returns [`TaskDomainError::InvalidObjectId`] when the value is
            /// not a 24-character hexadecimal object id.
            pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
                validate_object_id(&value.into()).map(Self)
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TaskDomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

object_id_type! {
    /// Unique identifier for a project.
    ProjectId
}

object_id_type! {
    /// Unique identifier for a task within a project.
    TaskId
}

object_id_type! {
    /// Unique identifier for a note on a task.
    NoteId
}

object_id_type! {
    /// Unique identifier for a user account.
    UserId
}

object_id_type! {
    /// Unique identifier for a status-change activity record.
    ActivityId
}

impl ActivityId {
    /// Returns the creation instant embedded in the identifier.
    ///
    /// Activity records carry no separate sort key; the timeline is ordered
    /// by this instant.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        let seconds = self
            .0
            .get(..TIMESTAMP_HEX_LEN)
            .and_then(|prefix| u32::from_str_radix(prefix, 16).ok())
            .unwrap_or_default();
        DateTime::from_timestamp(i64::from(seconds), 0).unwrap_or_default()
    }
}
