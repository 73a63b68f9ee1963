//! The URL-query selection protocol for the detail session.

use crate::task::domain::TaskId;

/// Which task (if any) the current URL query addresses.
///
/// Selection lives in the URL rather than in view-local state so an open
/// task is shareable and bookmarkable; this parser is the only way the
/// detail session learns what to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSelection {
    /// `viewTask=<id>`: open the task read-only.
    View(TaskId),
    /// `editTask=<id>`: open the task for editing.
    Edit(TaskId),
    /// `newTask=true`: open the creation form; no task to load.
    Create,
}

impl TaskSelection {
    /// Parses a selection out of a URL query string.
    ///
    /// Accepts the query with or without its leading `?`. The first
    /// recognized parameter wins. Fails closed: a malformed id yields no
    /// selection at all, so no detail view is shown.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let trimmed = query.strip_prefix('?').unwrap_or(query);
        for pair in trimmed.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            match key {
                "viewTask" => return TaskId::new(value).ok().map(Self::View),
                "editTask" => return TaskId::new(value).ok().map(Self::Edit),
                "newTask" if value == "true" => return Some(Self::Create),
                _ => {}
            }
        }
        None
    }

    /// Returns the addressed task id, if the selection names one.
    #[must_use]
    pub const fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::View(id) | Self::Edit(id) => Some(id),
            Self::Create => None,
        }
    }
}
