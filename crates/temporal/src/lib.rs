//! Date parsing layer for appver
//!
//! This crate turns day-key strings into orderable dates:
//! - DatePattern: Compiled letter-based date pattern (`yyyy-MM-dd`)
//! - SnapshotDate: Parsed calendar date (midnight unless the pattern has a time)
//! - ParseCache: Concurrent memo of successful parses, shared by `Arc`
//! - DateParser: A pattern bound to a cache
//!
//! Caching is transparent: a cached parse returns exactly what an uncached
//! parse of the same `(pattern, value)` would.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod date;
pub mod parser;
pub mod pattern;

pub use cache::{CacheStats, ParseCache};
pub use date::SnapshotDate;
pub use parser::DateParser;
pub use pattern::DatePattern;
