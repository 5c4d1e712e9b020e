//! Warning diagnostics
//!
//! Per-document failures never escape the evaluator. They are reported, one
//! event per failure, to a `WarningSink` supplied by the host.
//!
//! - `TracingSink`: emits `tracing` warnings (default)
//! - `CollectingSink`: keeps warnings in memory for batch forwarding and tests

use appver_core::Error;
use parking_lot::Mutex;
use std::fmt;
use tracing::warn;

/// Category of a recoverable failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// `_v` named an unknown schema revision
    UnsupportedSchema,
    /// `_v` was missing or not an integer
    UnreadableSchemaTag,
    /// Any other document failure (bad day key, malformed record)
    ParseError,
    /// A per-call perspective date did not parse
    InvalidPerspective,
}

impl WarningKind {
    /// Classify a per-document error
    pub fn of(err: &Error) -> Self {
        match err {
            Error::UnsupportedSchema { .. } => WarningKind::UnsupportedSchema,
            Error::UnreadableSchemaTag { .. } => WarningKind::UnreadableSchemaTag,
            _ => WarningKind::ParseError,
        }
    }

    /// Stable name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::UnsupportedSchema => "unsupported_schema",
            WarningKind::UnreadableSchemaTag => "unreadable_schema_tag",
            WarningKind::ParseError => "parse_error",
            WarningKind::InvalidPerspective => "invalid_perspective",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWarning {
    /// Failure category
    pub kind: WarningKind,
    /// Human-readable description
    pub message: String,
}

impl EvalWarning {
    /// Build a warning from a per-document error
    pub fn from_error(err: &Error) -> Self {
        Self {
            kind: WarningKind::of(err),
            message: err.to_string(),
        }
    }
}

/// Receives warnings from evaluations.
///
/// Sinks are shared across concurrent evaluations.
pub trait WarningSink: Send + Sync {
    /// Report one warning
    fn warn(&self, warning: EvalWarning);
}

/// Sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: EvalWarning) {
        warn!(target: "appver::eval", kind = %warning.kind, "{}", warning.message);
    }
}

/// Sink that keeps every warning in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<EvalWarning>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far
    pub fn warnings(&self) -> Vec<EvalWarning> {
        self.warnings.lock().clone()
    }

    /// Remove and return everything reported so far
    pub fn drain(&self) -> Vec<EvalWarning> {
        std::mem::take(&mut *self.warnings.lock())
    }

    /// Number of warnings held
    pub fn len(&self) -> usize {
        self.warnings.lock().len()
    }

    /// Check if no warnings are held
    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, warning: EvalWarning) {
        self.warnings.lock().push(warning);
    }
}
