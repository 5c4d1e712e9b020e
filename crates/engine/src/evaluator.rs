//! Per-row version-on-date evaluation
//!
//! `VersionOnDate` is constructed once per job with a date pattern and an
//! optional perspective date, then called once per row with that row's day
//! document. Each call builds a fresh index and resolves it; only the date
//! parse cache outlives a call.
//!
//! # Failure handling
//!
//! - Construction: an invalid pattern or perspective date is an error
//! - Per row: every failure becomes one warning and a `None` result

use appver_core::{DayDocument, Datum, Result};
use appver_temporal::{DateParser, DatePattern, ParseCache, SnapshotDate};
use std::sync::Arc;
use tracing::debug;

use crate::config::EvaluatorConfig;
use crate::diagnostics::{EvalWarning, TracingSink, WarningKind, WarningSink};
use crate::extract::Extractor;
use crate::index::VersionOnDateIndex;

/// Immutable per-job settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerspectiveConfig {
    pattern: DatePattern,
    perspective: Option<SnapshotDate>,
}

impl PerspectiveConfig {
    /// Compile `date_pattern` and parse `perspective_date` with it.
    ///
    /// # Errors
    ///
    /// Fails if the pattern does not compile or the perspective date does
    /// not match it.
    pub fn new(date_pattern: &str, perspective_date: Option<&str>) -> Result<Self> {
        let pattern = DatePattern::compile(date_pattern)?;
        let perspective = perspective_date.map(|d| pattern.parse(d)).transpose()?;
        Ok(Self {
            pattern,
            perspective,
        })
    }

    /// Compiled date pattern
    pub fn pattern(&self) -> &DatePattern {
        &self.pattern
    }

    /// Configured perspective date, if any
    pub fn perspective(&self) -> Option<SnapshotDate> {
        self.perspective
    }
}

/// Resolves the application version in effect on a perspective date
pub struct VersionOnDate {
    config: PerspectiveConfig,
    extractor: Extractor,
    sink: Arc<dyn WarningSink>,
}

impl std::fmt::Debug for VersionOnDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionOnDate")
            .field("config", &self.config)
            .field("extractor", &self.extractor)
            .finish_non_exhaustive()
    }
}

impl VersionOnDate {
    /// Create an evaluator.
    ///
    /// `cache` may be shared with other evaluators; warnings go to
    /// `tracing` until `with_sink` is called.
    ///
    /// # Errors
    ///
    /// Fails if the pattern does not compile or `perspective_date` does not
    /// match it.
    pub fn new(
        date_pattern: &str,
        perspective_date: Option<&str>,
        cache: Arc<ParseCache>,
    ) -> Result<Self> {
        let config = PerspectiveConfig::new(date_pattern, perspective_date)?;
        let parser = DateParser::new(config.pattern().clone(), cache);
        Ok(Self {
            config,
            extractor: Extractor::new(parser),
            sink: Arc::new(TracingSink),
        })
    }

    /// Create an evaluator from a loaded configuration
    pub fn from_config(config: &EvaluatorConfig, cache: Arc<ParseCache>) -> Result<Self> {
        config.validate()?;
        let mut evaluator = Self::new(
            &config.date_pattern,
            config.perspective_date.as_deref(),
            cache,
        )?;
        evaluator.extractor = evaluator
            .extractor
            .with_version_info_field(config.version_info_field.clone());
        Ok(evaluator)
    }

    /// Report warnings to `sink` instead of `tracing`
    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Per-job settings
    pub fn config(&self) -> &PerspectiveConfig {
        &self.config
    }

    /// The shared parse cache
    pub fn cache(&self) -> &Arc<ParseCache> {
        self.extractor.parser().cache()
    }

    /// Build the date → version index for one document.
    ///
    /// Unlike the `exec` family this returns errors to the caller.
    pub fn build_index(&self, document: DayDocument<'_>) -> Result<VersionOnDateIndex> {
        self.extractor.build_index(document)
    }

    /// Resolve the version in effect on the configured perspective date.
    ///
    /// Returns `None` for a missing or empty document, when no perspective
    /// date is configured, when no day precedes the perspective, or when the
    /// document fails to parse (reported to the sink).
    pub fn exec(&self, input: Option<&Datum>) -> Option<String> {
        let perspective = self.config.perspective?;
        self.exec_at(input, perspective)
    }

    /// Resolve the version in effect on `perspective`
    pub fn exec_at(&self, input: Option<&Datum>, perspective: SnapshotDate) -> Option<String> {
        let index = self.index_or_warn(input?)?;
        index.resolve(perspective).map(str::to_string)
    }

    /// Resolve the version in effect on a perspective date string.
    ///
    /// An empty string means no perspective and returns `None` quietly. Any
    /// other string that does not match the pattern is reported as a warning.
    pub fn exec_at_str(&self, input: Option<&Datum>, perspective: &str) -> Option<String> {
        if perspective.is_empty() {
            return None;
        }
        match self.extractor.parser().parse(perspective) {
            Ok(date) => self.exec_at(input, date),
            Err(e) => {
                self.sink.warn(EvalWarning {
                    kind: WarningKind::InvalidPerspective,
                    message: e.to_string(),
                });
                None
            }
        }
    }

    fn index_or_warn(&self, input: &Datum) -> Option<VersionOnDateIndex> {
        let built = DayDocument::from_datum(input)
            .and_then(|doc| doc.map(|doc| self.build_index(doc)).transpose());

        match built {
            Ok(Some(index)) => {
                debug!(target: "appver::eval", entries = index.len(), "built version index");
                Some(index)
            }
            Ok(None) => None,
            Err(e) => {
                // configuration and I/O failures are caught at construction
                debug_assert!(e.is_recoverable(), "per-row failure not recoverable: {e}");
                self.sink.warn(EvalWarning::from_error(&e));
                None
            }
        }
    }
}
