//! Version-info schema revisions
//!
//! Each day's version-info record carries a `_v` tag naming the layout of
//! the rest of the record:
//! - `_v = 1`: versions listed under `version`
//! - `_v = 2`: versions listed under `appVersion`
//!
//! Any other tag is carried as `Unsupported` so dispatch stays a closed
//! match; adding a revision means adding a variant and its field.

use appver_core::{Datum, Error, Result};
use std::collections::HashMap;

/// Default name of the per-day field holding version info
pub const VERSION_INFO_FIELD: &str = "org.mozilla.appInfo.versions";

/// Name of the schema revision tag inside a version-info record
pub const SCHEMA_TAG_FIELD: &str = "_v";

/// Version-list field for revision 1
pub const V1_VERSION_FIELD: &str = "version";

/// Version-list field for revision 2
pub const V2_VERSION_FIELD: &str = "appVersion";

/// Separator between co-reported versions
pub const MULTI_VERSION_DELIMITER: &str = "|";

/// Layout of a version-info record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRevision {
    /// `_v = 1`
    V1,
    /// `_v = 2`
    V2,
    /// Any other tag value
    Unsupported(i64),
}

impl SchemaRevision {
    /// Map a tag value to a revision
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            1 => SchemaRevision::V1,
            2 => SchemaRevision::V2,
            other => SchemaRevision::Unsupported(other),
        }
    }

    /// Read the `_v` tag of a version-info record.
    ///
    /// A missing or non-integer tag is `UnreadableSchemaTag`.
    pub fn read(day: &str, record: &HashMap<String, Datum>) -> Result<Self> {
        match record.get(SCHEMA_TAG_FIELD) {
            Some(Datum::Int(tag)) => Ok(Self::from_tag(*tag)),
            Some(other) => Err(Error::UnreadableSchemaTag {
                day: day.to_string(),
                found: other.type_name(),
            }),
            None => Err(Error::UnreadableSchemaTag {
                day: day.to_string(),
                found: "missing",
            }),
        }
    }

    /// Field holding the version list, or `UnsupportedSchema`
    pub fn version_field(&self, day: &str) -> Result<&'static str> {
        match self {
            SchemaRevision::V1 => Ok(V1_VERSION_FIELD),
            SchemaRevision::V2 => Ok(V2_VERSION_FIELD),
            SchemaRevision::Unsupported(tag) => Err(Error::UnsupportedSchema {
                day: day.to_string(),
                tag: *tag,
            }),
        }
    }
}
