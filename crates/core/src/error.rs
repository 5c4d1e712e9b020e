//! Error types for appver
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Errors fall into two groups:
//! - Configuration errors (`InvalidPattern`, `Config`, `Io`, and a perspective
//!   date that fails to parse) abort construction of an evaluator.
//! - Per-document errors abort index construction for one document only and
//!   are downgraded to a warning by the evaluator.

use std::io;
use thiserror::Error;

/// Result type alias for appver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for appver
#[derive(Debug, Error)]
pub enum Error {
    /// A date string did not match the configured pattern
    #[error("Unparseable date '{value}' for pattern '{pattern}': {reason}")]
    DateParse {
        /// Pattern the value was parsed against
        pattern: String,
        /// Offending input
        value: String,
        /// Parser diagnostic
        reason: String,
    },

    /// A date pattern could not be compiled
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern as supplied by the caller
        pattern: String,
        /// What was wrong with it
        reason: String,
    },

    /// The per-row input was not a date-keyed map
    #[error("Invalid document: expected Map, found {found}")]
    InvalidDocument {
        /// Type name of the datum that was supplied
        found: &'static str,
    },

    /// A day entry's value was not a map
    #[error("Malformed day '{day}': expected Map, found {found}")]
    MalformedDay {
        /// Day key
        day: String,
        /// Type name of the day's value
        found: &'static str,
    },

    /// The `_v` tag of a version-info record was missing or not an integer
    #[error("Error parsing doc version on day '{day}': found {found}")]
    UnreadableSchemaTag {
        /// Day key
        day: String,
        /// Type name of the tag value ("missing" when absent)
        found: &'static str,
    },

    /// The `_v` tag named a schema revision this crate does not understand
    #[error("Unsupported doc version {tag} on day '{day}'")]
    UnsupportedSchema {
        /// Day key
        day: String,
        /// Tag value
        tag: i64,
    },

    /// A version-list field was present but not a bag of tuples
    #[error("Malformed version list '{field}' on day '{day}': {reason}")]
    MalformedVersionList {
        /// Day key
        day: String,
        /// Field name (`version` or `appVersion`)
        field: &'static str,
        /// What was found instead
        reason: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a `DateParse` error
    pub fn date_parse(
        pattern: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Error::DateParse {
            pattern: pattern.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Build an `InvalidPattern` error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Build a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether this error is scoped to a single document.
    ///
    /// Recoverable errors void the current document's index and are
    /// reported as warnings; the rest are configuration failures.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Error::InvalidPattern { .. } | Error::Config(_) | Error::Io(_)
        )
    }
}
