//! User-visible status surface.
//!
//! The transport reports progress and errors through this trait instead of
//! talking to any particular UI, so the protocol logic stays independently
//! testable.

/// Sink for human-readable progress/error strings.
pub trait StatusSink: Send + Sync {
    fn status(&self, message: &str);
}

/// Prints status lines to stdout (the CLI's visible surface).
#[derive(Debug, Default)]
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn status(&self, message: &str) {
        println!("{message}");
    }
}

/// Degraded mode: no visible surface exists, route status to the log.
#[derive(Debug, Default)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn status(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
