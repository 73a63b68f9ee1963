//! Notifier adapter that forwards notifications to the tracing subscriber.

use crate::board::ports::Notifier;

/// Emits notifications as structured log events.
///
/// Headless stand-in for a toast layer: hosts embedding the engine in a UI
/// supply their own [`Notifier`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "taskboard::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "taskboard::notify", "{message}");
    }
}
