//! Shared test utilities for the integration suite.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;
use std::sync::{Arc, Once};

pub use appver::{
    CollectingSink, Datum, ParseCache, SnapshotDate, VersionOnDate, WarningKind,
    SCHEMA_TAG_FIELD, V1_VERSION_FIELD, V2_VERSION_FIELD, VERSION_INFO_FIELD,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output to the test harness so warnings show with --nocapture.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Path of a file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The `data.days` map of the sample payload
pub fn sample_days() -> Datum {
    let text = std::fs::read_to_string(fixture_path("sample_days.json")).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&text).unwrap();
    Datum::from(payload["data"]["days"].clone())
}

// ============================================================================
// Document builders
// ============================================================================

/// A day record with a version-info field of the given revision
pub fn versioned_day(tag: i64, versions: &[&str]) -> Datum {
    let field = if tag == 2 {
        V2_VERSION_FIELD
    } else {
        V1_VERSION_FIELD
    };
    Datum::map([(
        VERSION_INFO_FIELD,
        Datum::map([
            (SCHEMA_TAG_FIELD, Datum::Int(tag)),
            (field, Datum::bag_of_strs(versions.iter().copied())),
        ]),
    )])
}

/// A day record that reports something other than versions
pub fn unversioned_day() -> Datum {
    Datum::map([(
        "org.mozilla.crashes.crashes",
        Datum::map([(SCHEMA_TAG_FIELD, Datum::Int(1)), ("pending", Datum::Int(1))]),
    )])
}

/// A document from `(day key, day record)` pairs
pub fn document<'a>(days: impl IntoIterator<Item = (&'a str, Datum)>) -> Datum {
    Datum::map(days)
}

// ============================================================================
// Evaluators
// ============================================================================

/// `yyyy-MM-dd` evaluator with its own cache and a collecting sink
pub fn evaluator(perspective: Option<&str>) -> (VersionOnDate, Arc<CollectingSink>) {
    evaluator_with_cache(perspective, Arc::new(ParseCache::new()))
}

/// `yyyy-MM-dd` evaluator over a shared cache
pub fn evaluator_with_cache(
    perspective: Option<&str>,
    cache: Arc<ParseCache>,
) -> (VersionOnDate, Arc<CollectingSink>) {
    init_tracing();
    let sink = Arc::new(CollectingSink::new());
    let vod = VersionOnDate::new("yyyy-MM-dd", perspective, cache)
        .unwrap()
        .with_sink(sink.clone());
    (vod, sink)
}

/// Midnight of `year-month-day`
pub fn ymd(year: i32, month: u32, day: u32) -> SnapshotDate {
    SnapshotDate::from_ymd(year, month, day).unwrap()
}
