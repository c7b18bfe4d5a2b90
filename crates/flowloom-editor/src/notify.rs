//! # Notification Sink
//!
//! The editor emits `(level, message, description)` triples; the host decides
//! how (and whether) to display them. Display lifecycle is not managed here.

/// Severity of a user-facing alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// Receives human-readable success/error messages from the editor.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, level: AlertLevel, message: &str, description: &str);
}

/// Default sink: forwards alerts to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, level: AlertLevel, message: &str, description: &str) {
        match level {
            AlertLevel::Info => tracing::info!(description, "{message}"),
            AlertLevel::Warning => tracing::warn!(description, "{message}"),
            AlertLevel::Error => tracing::error!(description, "{message}"),
        }
    }
}
