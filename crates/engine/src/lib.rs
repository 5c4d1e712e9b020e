//! Version-on-date engine for appver
//!
//! This crate resolves which application version was in effect on a
//! perspective date:
//! - Extractor: Builds a date → version index from one day document
//! - VersionOnDateIndex: Nearest-preceding-date lookup
//! - SchemaRevision: `_v` tag dispatch (v1 `version`, v2 `appVersion`)
//! - VersionOnDate: Per-row entry point that never fails, reporting
//!   problems to a WarningSink
//! - EvaluatorConfig: TOML configuration
//!
//! The engine is the only component that knows the version-info schema.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod diagnostics;
pub mod evaluator;
pub mod extract;
pub mod index;
pub mod schema;

pub use config::{CacheConfig, EvaluatorConfig};
pub use diagnostics::{CollectingSink, EvalWarning, TracingSink, WarningKind, WarningSink};
pub use evaluator::{PerspectiveConfig, VersionOnDate};
pub use extract::{join_versions, Extractor};
pub use index::VersionOnDateIndex;
pub use schema::{
    SchemaRevision, MULTI_VERSION_DELIMITER, SCHEMA_TAG_FIELD, V1_VERSION_FIELD,
    V2_VERSION_FIELD, VERSION_INFO_FIELD,
};
