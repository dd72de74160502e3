//! Logging sink abstraction
//!
//! The host framework hands plugins a logger with four severities. This module
//! models that seam as a trait so the orchestration code can be driven by the
//! standard `log` facade in production and by a capturing sink in tests.

use std::sync::Mutex;

/// Severity levels of the host logging facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    /// Low-priority/verbose output, used for streamed subprocess lines
    LowInfo,
    Warning,
    Error,
}

/// Logging sink with the four severities the host framework exposes.
pub trait LogSink: Send + Sync {
    fn info(&self, msg: &str);
    fn lowinfo(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Default sink forwarding to the `log` facade macros.
///
/// `lowinfo` maps to `debug!` so streamed install output stays out of the
/// default filter level but is available under `RUST_LOG=debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdLog;

impl LogSink for StdLog {
    fn info(&self, msg: &str) {
        log::info!("{}", msg);
    }

    fn lowinfo(&self, msg: &str) {
        log::debug!("{}", msg);
    }

    fn warning(&self, msg: &str) {
        log::warn!("{}", msg);
    }

    fn error(&self, msg: &str) {
        log::error!("{}", msg);
    }
}

/// Capturing sink for tests: records every message with its severity.
#[derive(Debug, Default)]
pub struct RecordingLog {
    records: Mutex<Vec<(Severity, String)>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded (severity, message) pairs in arrival order.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().expect("RecordingLog mutex poisoned").clone()
    }

    /// All messages recorded at the given severity, in arrival order.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }

    /// Whether any message at the given severity contains the needle.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.messages_at(severity).iter().any(|m| m.contains(needle))
    }

    fn record(&self, severity: Severity, msg: &str) {
        self.records
            .lock()
            .expect("RecordingLog mutex poisoned")
            .push((severity, msg.to_string()));
    }
}

impl LogSink for RecordingLog {
    fn info(&self, msg: &str) {
        self.record(Severity::Info, msg);
    }

    fn lowinfo(&self, msg: &str) {
        self.record(Severity::LowInfo, msg);
    }

    fn warning(&self, msg: &str) {
        self.record(Severity::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.record(Severity::Error, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_log_preserves_order() {
        let log = RecordingLog::new();
        log.info("first");
        log.error("second");
        log.lowinfo("third");

        let records = log.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], (Severity::Info, "first".to_string()));
        assert_eq!(records[1], (Severity::Error, "second".to_string()));
        assert_eq!(records[2], (Severity::LowInfo, "third".to_string()));
    }

    #[test]
    fn test_recording_log_filters_by_severity() {
        let log = RecordingLog::new();
        log.warning("careful");
        log.info("fine");
        log.warning("still careful");

        assert_eq!(log.messages_at(Severity::Warning).len(), 2);
        assert_eq!(log.messages_at(Severity::Error).len(), 0);
        assert!(log.contains(Severity::Warning, "careful"));
        assert!(!log.contains(Severity::Info, "careful"));
    }
}
