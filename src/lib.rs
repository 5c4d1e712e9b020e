//! appver - Resolve the application version in effect on a date
//!
//! Telemetry snapshot documents record, per day, which application
//! versions were observed. Given a perspective date, appver finds the
//! latest day on or before it that reported versions and returns them.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use appver::{Datum, ParseCache, VersionOnDate};
//!
//! let vod = VersionOnDate::new("yyyy-MM-dd", Some("2012-10-22"), Arc::new(ParseCache::new()))?;
//!
//! let doc = Datum::from(serde_json::json!({
//!     "2012-08-01": {"org.mozilla.appInfo.versions": {"_v": 1, "version": ["14.0"]}},
//!     "2012-09-15": {"org.mozilla.appInfo.versions": {"_v": 1, "version": ["15.0"]}},
//! }));
//! assert_eq!(vod.exec(Some(&doc)).as_deref(), Some("15.0"));
//! # Ok::<(), appver::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `appver-core`: Datum value model, DayDocument, Error
//! - `appver-temporal`: Date patterns and the concurrent parse cache
//! - `appver-engine`: Extraction, resolution, diagnostics, configuration

pub use appver_core::{DayDocument, Datum, Error, Result};
pub use appver_engine::*;
pub use appver_temporal::{CacheStats, DateParser, DatePattern, ParseCache, SnapshotDate};
