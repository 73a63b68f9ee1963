//! Recording notifier for assertions in tests.

use crate::board::ports::Notifier;
use std::sync::{Mutex, PoisonError};

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A success notification with its message.
    Success(String),
    /// A failure notification with its message.
    Error(String),
}

/// Notifier that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded notifications in emission order.
    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Counts the recorded failure notifications.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|entry| matches!(entry, Notification::Error(_)))
            .count()
    }

    /// Counts the recorded success notifications.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|entry| matches!(entry, Notification::Success(_)))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.lock().push(Notification::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.lock().push(Notification::Error(message.to_owned()));
    }
}
