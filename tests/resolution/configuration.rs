//! Evaluators built from configuration files

use crate::common::*;
use appver::{Error, EvaluatorConfig};
use tempfile::TempDir;

#[test]
fn evaluator_from_file_resolves_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appver.toml");
    std::fs::write(
        &path,
        r#"
date_pattern = "yyyy-MM-dd"
perspective_date = "2013-03-21"

[cache]
max_entries_per_pattern = 3
"#,
    )
    .unwrap();

    let config = EvaluatorConfig::from_file(&path).unwrap();
    let cache = config.cache.build();
    let vod = VersionOnDate::from_config(&config, cache.clone()).unwrap();

    assert_eq!(vod.exec(Some(&sample_days())).as_deref(), Some("21.0"));
    // The limit caps the cache without changing the answer
    assert_eq!(cache.len(), 3);
    assert_eq!(vod.exec(Some(&sample_days())).as_deref(), Some("21.0"));
}

#[test]
fn day_first_pattern() {
    let config = EvaluatorConfig::from_toml_str(
        r#"
date_pattern = "dd/MM/yyyy"
perspective_date = "22/10/2012"
"#,
    )
    .unwrap();
    let vod = VersionOnDate::from_config(&config, config.cache.build()).unwrap();
    let doc = document([
        ("01/08/2012", versioned_day(1, &["14.0"])),
        ("15/09/2012", versioned_day(1, &["15.0"])),
    ]);
    assert_eq!(vod.exec(Some(&doc)).as_deref(), Some("15.0"));
}

#[test]
fn invalid_perspective_in_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appver.toml");
    std::fs::write(&path, "perspective_date = \"last week\"\n").unwrap();

    let err = EvaluatorConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::DateParse { .. }));
}

#[test]
fn config_without_perspective_needs_per_call_date() {
    let config = EvaluatorConfig::from_toml_str(EvaluatorConfig::default_toml()).unwrap();
    let vod = VersionOnDate::from_config(&config, config.cache.build()).unwrap();
    let days = sample_days();

    assert_eq!(vod.exec(Some(&days)), None);
    assert_eq!(vod.exec_at_str(Some(&days), "2013-03-10").as_deref(), Some("21.0a1|21.0a2"));
    assert_eq!(vod.exec_at(Some(&days), ymd(2013, 3, 14)).as_deref(), Some("21.0b1"));
}
