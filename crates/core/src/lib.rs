//! Core types for appver
//!
//! This crate defines the foundational types shared by the other crates:
//! - Datum: Nested value model supplied by the host processing engine
//! - DayDocument: Read-only view over a date-keyed snapshot document
//! - Error: Error taxonomy for construction-time and per-document failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod value;

pub use document::DayDocument;
pub use error::{Error, Result};
pub use value::Datum;
