//! Notification port for user-visible mutation outcomes.

/// Sink for the non-blocking notifications the board produces.
///
/// Every mutation outcome surfaces exactly once: success when the remote
/// commits, failure when it rejects. Delivery is fire-and-forget — a
/// notification can never fail back into the engine.
pub trait Notifier: Send + Sync {
    /// Reports a successful mutation.
    fn success(&self, message: &str);

    /// Reports a failed mutation.
    fn error(&self, message: &str);
}
