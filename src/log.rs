//! Process-wide log severity gate.
//!
//! The surrounding system logs on the conventional 8-level syslog scale,
//! lowest number most severe. A single process-wide threshold decides
//! which calls reach the sink; everything below it is dropped before any
//! formatting happens.
//!
//! # Design
//!
//! The threshold is set once and read on every log call, so it lives in a
//! single `AtomicU8` - no lock, no global initialization order to worry
//! about. Emission bridges onto [`tracing`] events so the host application
//! keeps its usual subscriber; the 8-level scale folds onto tracing's
//! levels at the call site.
//!
//! The gate is deliberately separate from the ring buffer, which carries
//! no global state of any kind.
//!
//! # Usage
//!
//! ```
//! use ringstage::log::{self, Severity};
//!
//! log::set_threshold(Severity::Debug);
//! assert!(log::enabled(Severity::Info));
//! log::emit(Severity::Notice, format_args!("session opened"));
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

/// Syslog-style severity, lowest number most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical condition.
    Critical = 2,
    /// Error condition.
    Error = 3,
    /// Warning condition.
    Warning = 4,
    /// Normal but significant event.
    Notice = 5,
    /// Informational message.
    Info = 6,
    /// Debug-level message.
    Debug = 7,
}

impl Severity {
    /// Numeric syslog priority of this severity.
    #[inline]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Map a numeric syslog priority back to a severity.
    ///
    /// Returns `None` for values outside the 8-level scale.
    pub fn from_priority(priority: u8) -> Option<Self> {
        match priority {
            0 => Some(Severity::Emergency),
            1 => Some(Severity::Alert),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Error),
            4 => Some(Severity::Warning),
            5 => Some(Severity::Notice),
            6 => Some(Severity::Info),
            7 => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Conventional syslog name, e.g. `"warning"`.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emerg",
            Severity::Alert => "alert",
            Severity::Critical => "crit",
            Severity::Error => "err",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Default threshold: notice and more severe pass.
pub const DEFAULT_THRESHOLD: Severity = Severity::Notice;

static THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_THRESHOLD as u8);

/// Set the process-wide severity threshold.
///
/// Calls at the threshold or more severe pass the gate; everything else
/// is dropped.
pub fn set_threshold(severity: Severity) {
    THRESHOLD.store(severity as u8, Ordering::Release);
}

/// Current process-wide severity threshold.
pub fn threshold() -> Severity {
    // The store side only ever writes valid priorities.
    Severity::from_priority(THRESHOLD.load(Ordering::Acquire)).unwrap_or(DEFAULT_THRESHOLD)
}

/// Check whether a call at `severity` would pass the gate.
#[inline]
pub fn enabled(severity: Severity) -> bool {
    severity as u8 <= THRESHOLD.load(Ordering::Acquire)
}

/// Emit a message at `severity` if it passes the gate.
///
/// The 8-level scale folds onto tracing's levels: emergency through error
/// become `error!`, warning becomes `warn!`, notice and info become
/// `info!`, debug becomes `debug!`. The numeric priority is attached as
/// a field so a subscriber can recover the finer scale.
pub fn emit(severity: Severity, message: std::fmt::Arguments<'_>) {
    if !enabled(severity) {
        return;
    }
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
            tracing::error!(priority = severity.priority(), "{}", message);
        }
        Severity::Warning => {
            tracing::warn!(priority = severity.priority(), "{}", message);
        }
        Severity::Notice | Severity::Info => {
            tracing::info!(priority = severity.priority(), "{}", message);
        }
        Severity::Debug => {
            tracing::debug!(priority = severity.priority(), "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_roundtrip() {
        for priority in 0..8 {
            let severity = Severity::from_priority(priority).unwrap();
            assert_eq!(severity.priority(), priority);
        }
    }

    #[test]
    fn test_priority_out_of_range() {
        assert_eq!(Severity::from_priority(8), None);
        assert_eq!(Severity::from_priority(255), None);
    }

    #[test]
    fn test_severity_ordering() {
        // Lowest number is most severe.
        assert!(Severity::Emergency < Severity::Debug);
        assert!(Severity::Error < Severity::Warning);
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Emergency.to_string(), "emerg");
    }

    /// The threshold is process-wide state, so the set/check transitions
    /// are exercised in a single sequential test.
    #[test]
    fn test_threshold_gate() {
        assert_eq!(threshold(), DEFAULT_THRESHOLD);
        assert!(enabled(Severity::Error));
        assert!(enabled(Severity::Notice));
        assert!(!enabled(Severity::Debug));

        set_threshold(Severity::Error);
        assert_eq!(threshold(), Severity::Error);
        assert!(enabled(Severity::Critical));
        assert!(!enabled(Severity::Warning));

        set_threshold(Severity::Debug);
        assert!(enabled(Severity::Debug));

        // Emission through the gate must not panic with no subscriber.
        emit(Severity::Info, format_args!("gate check {}", 1));

        set_threshold(DEFAULT_THRESHOLD);
    }
}
