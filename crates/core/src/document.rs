//! Date-keyed snapshot documents
//!
//! A `DayDocument` is a read-only view over the map the host passes per row:
//! each key is a day string, each value a nested record for that day. The
//! view never copies or mutates the underlying datum.

use crate::error::{Error, Result};
use crate::value::Datum;
use std::collections::HashMap;

/// Read-only view over a date-keyed map of day records
#[derive(Debug, Clone, Copy)]
pub struct DayDocument<'a> {
    days: &'a HashMap<String, Datum>,
}

impl<'a> DayDocument<'a> {
    /// Wrap a datum as a day document.
    ///
    /// Returns `Ok(None)` for a null datum (no document supplied) and
    /// `InvalidDocument` for anything other than a map.
    pub fn from_datum(datum: &'a Datum) -> Result<Option<Self>> {
        match datum {
            Datum::Null => Ok(None),
            Datum::Map(days) => Ok(Some(Self { days })),
            other => Err(Error::InvalidDocument {
                found: other.type_name(),
            }),
        }
    }

    /// Wrap an existing map
    pub fn new(days: &'a HashMap<String, Datum>) -> Self {
        Self { days }
    }

    /// Number of day entries
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Check if the document has no day entries
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate day entries as `(day key, day record)`.
    ///
    /// Iteration order is unspecified.
    pub fn days(&self) -> impl Iterator<Item = (&'a str, &'a Datum)> {
        self.days.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up one day's record
    pub fn day(&self, key: &str) -> Option<&'a Datum> {
        self.days.get(key)
    }
}
