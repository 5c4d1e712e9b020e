//! Date-indexed version extraction
//!
//! Walks every day of a document and builds a `VersionOnDateIndex`.
//!
//! Per day:
//! 1. No version-info field (or a null record): skip, nothing is parsed
//! 2. Parse the day key with the configured pattern
//! 3. Read `_v` and dispatch on the schema revision
//! 4. Join the version list: a tuple's fields are concatenated, tuples are
//!    joined with `|` in list order
//! 5. An empty join contributes no entry
//!
//! Any error aborts the whole document. The caller gets the error, never a
//! partial index.

use appver_core::{DayDocument, Datum, Error, Result};
use appver_temporal::{DateParser, SnapshotDate};

use crate::index::VersionOnDateIndex;
use crate::schema::{SchemaRevision, MULTI_VERSION_DELIMITER, VERSION_INFO_FIELD};

/// Builds a date → version index from day documents
#[derive(Debug, Clone)]
pub struct Extractor {
    parser: DateParser,
    version_info_field: String,
}

impl Extractor {
    /// Create an extractor reading the default version-info field
    pub fn new(parser: DateParser) -> Self {
        Self {
            parser,
            version_info_field: VERSION_INFO_FIELD.to_string(),
        }
    }

    /// Read version info from a differently named per-day field
    pub fn with_version_info_field(mut self, field: impl Into<String>) -> Self {
        self.version_info_field = field.into();
        self
    }

    /// The day-key parser
    pub fn parser(&self) -> &DateParser {
        &self.parser
    }

    /// Name of the per-day version-info field
    pub fn version_info_field(&self) -> &str {
        &self.version_info_field
    }

    /// Build the index for one document.
    ///
    /// An empty document yields an empty index. The first failing day
    /// aborts the build.
    pub fn build_index(&self, document: DayDocument<'_>) -> Result<VersionOnDateIndex> {
        let mut index = VersionOnDateIndex::new();
        for (day, record) in document.days() {
            if let Some((date, version)) = self.extract_day(day, record)? {
                index.insert(date, version);
            }
        }
        Ok(index)
    }

    fn extract_day(&self, day: &str, record: &Datum) -> Result<Option<(SnapshotDate, String)>> {
        let fields = match record {
            Datum::Null => return Ok(None),
            Datum::Map(fields) => fields,
            other => {
                return Err(Error::MalformedDay {
                    day: day.to_string(),
                    found: other.type_name(),
                })
            }
        };

        let info = match fields.get(&self.version_info_field) {
            None => return Ok(None),
            Some(Datum::Map(info)) => info,
            Some(other) => {
                return Err(Error::MalformedDay {
                    day: day.to_string(),
                    found: other.type_name(),
                })
            }
        };

        let date = self.parser.parse(day)?;
        let field = SchemaRevision::read(day, info)?.version_field(day)?;

        let version = match info.get(field) {
            None | Some(Datum::Null) => None,
            Some(list) => join_versions(day, field, list)?,
        };
        Ok(version.map(|v| (date, v)))
    }
}

/// Join a bag of version tuples into one string.
///
/// Returns `None` when nothing non-empty was produced.
pub fn join_versions(day: &str, field: &'static str, list: &Datum) -> Result<Option<String>> {
    let tuples = list.as_bag().ok_or_else(|| Error::MalformedVersionList {
        day: day.to_string(),
        field,
        reason: format!("expected Bag, found {}", list.type_name()),
    })?;

    let mut joined = String::new();
    for tuple in tuples {
        let parts = tuple.as_tuple().ok_or_else(|| Error::MalformedVersionList {
            day: day.to_string(),
            field,
            reason: format!("expected Tuple element, found {}", tuple.type_name()),
        })?;

        let version: String = parts.iter().map(Datum::to_string).collect();
        if version.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(MULTI_VERSION_DELIMITER);
        }
        joined.push_str(&version);
    }

    Ok((!joined.is_empty()).then_some(joined))
}
