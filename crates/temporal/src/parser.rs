//! Cached date parsing
//!
//! `DateParser` binds a compiled pattern to a shared `ParseCache`. Cloning a
//! parser is cheap; all clones share the same cache.

use appver_core::Result;
use std::sync::Arc;
use tracing::trace;

use crate::cache::ParseCache;
use crate::date::SnapshotDate;
use crate::pattern::DatePattern;

/// A date pattern bound to a parse cache
#[derive(Debug, Clone)]
pub struct DateParser {
    pattern: Arc<DatePattern>,
    cache: Arc<ParseCache>,
}

impl DateParser {
    /// Bind a compiled pattern to a cache
    pub fn new(pattern: DatePattern, cache: Arc<ParseCache>) -> Self {
        Self {
            pattern: Arc::new(pattern),
            cache,
        }
    }

    /// Compile a letter-based pattern and bind it to a cache
    pub fn compile(pattern: &str, cache: Arc<ParseCache>) -> Result<Self> {
        Ok(Self::new(DatePattern::compile(pattern)?, cache))
    }

    /// The compiled pattern
    pub fn pattern(&self) -> &DatePattern {
        &self.pattern
    }

    /// The shared cache
    pub fn cache(&self) -> &Arc<ParseCache> {
        &self.cache
    }

    /// Parse `value`, consulting the cache first.
    ///
    /// Failures are not cached.
    pub fn parse(&self, value: &str) -> Result<SnapshotDate> {
        let format = self.pattern.format();
        if let Some(date) = self.cache.get(format, value) {
            return Ok(date);
        }

        let date = self.pattern.parse(value)?;
        if !self.cache.insert(format, value, date) {
            trace!(target: "appver::temporal", format, value, "parse cache partition full");
        }
        Ok(date)
    }
}
