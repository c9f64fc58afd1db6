//! Event logging collaborator for the rewrite pipeline.
//!
//! The pipeline never aborts on payload read/write failures under the default
//! policy; instead it pushes diagnostic strings through an [`EventLog`]. The
//! trait is a single-method capability: any sink that accepts a string
//! message satisfies it, and it is injected as a parameter rather than
//! inherited from.
//!
//! Two sinks are provided: [`LogFacade`] forwards to the `log` crate, and
//! [`MemoryLog`] buffers messages for later inspection (useful in tests and
//! for callers that want to examine diagnostics after the run).

use std::sync::Mutex;

/// A sink for diagnostic messages emitted by the rewrite pipeline.
///
/// Implementations must not panic; the pipeline ignores everything about the
/// call except that it happened.
pub trait EventLog {
    /// Records one diagnostic message.
    fn log(&self, message: &str);
}

/// Forwards events to the [`log`] crate at `warn` level.
///
/// Use this when the application already has a `log`-compatible logger
/// installed and no per-run message capture is needed.
pub struct LogFacade;

impl EventLog for LogFacade {
    fn log(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Buffers events in memory.
///
/// Interior mutability lets the pipeline take `&dyn EventLog` while callers
/// keep a handle to read the entries back afterwards.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded messages, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Returns `true` if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().map(|e| e.is_empty()).unwrap_or(true)
    }
}

impl EventLog for MemoryLog {
    fn log(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(message.to_string());
        }
    }
}

/// Appends a local timestamp to a diagnostic message.
///
/// The `%m/%d/%Y, %H:%M:%S` format is the wire format callers of the original
/// system parse out of their logs.
pub(crate) fn stamp(message: &str) -> String {
    format!(
        "{message} at {}",
        chrono::Local::now().format("%m/%d/%Y, %H:%M:%S")
    )
}
