//! Document-level failure policy
//!
//! Any bad day voids the whole document: the result is absent and exactly
//! one warning is reported, however many valid days the document holds.

use crate::common::*;

fn valid_days() -> Vec<(&'static str, Datum)> {
    vec![
        ("2012-08-01", versioned_day(1, &["14.0"])),
        ("2012-09-15", versioned_day(2, &["15.0"])),
        ("2012-09-20", unversioned_day()),
    ]
}

fn with_day(key: &'static str, record: Datum) -> Datum {
    let mut days = valid_days();
    days.push((key, record));
    document(days)
}

#[test]
fn valid_document_resolves() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    assert_eq!(vod.exec(Some(&document(valid_days()))).as_deref(), Some("15.0"));
    assert!(sink.is_empty());
}

#[test]
fn unsupported_revision_voids_document() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let doc = with_day("2012-07-01", versioned_day(3, &["13.0"]));

    assert_eq!(vod.exec(Some(&doc)), None);
    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::UnsupportedSchema);
}

#[test]
fn unsupported_revision_after_perspective_still_voids_document() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let doc = with_day("2013-01-01", versioned_day(3, &["16.0"]));
    assert_eq!(vod.exec(Some(&doc)), None);
    assert_eq!(sink.len(), 1);
}

#[test]
fn unreadable_tag_voids_document() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let info = Datum::map([
        (SCHEMA_TAG_FIELD, Datum::Float(1.0)),
        (V1_VERSION_FIELD, Datum::bag_of_strs(["13.0"])),
    ]);
    let doc = with_day("2012-07-01", Datum::map([(VERSION_INFO_FIELD, info)]));

    assert_eq!(vod.exec(Some(&doc)), None);
    assert_eq!(sink.warnings()[0].kind, WarningKind::UnreadableSchemaTag);
}

#[test]
fn missing_tag_voids_document() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let info = Datum::map([(V1_VERSION_FIELD, Datum::bag_of_strs(["13.0"]))]);
    let doc = with_day("2012-07-01", Datum::map([(VERSION_INFO_FIELD, info)]));

    assert_eq!(vod.exec(Some(&doc)), None);
    assert_eq!(sink.warnings()[0].kind, WarningKind::UnreadableSchemaTag);
}

#[test]
fn malformed_day_key_voids_document() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let doc = with_day("07/01/2012", versioned_day(1, &["13.0"]));

    assert_eq!(vod.exec(Some(&doc)), None);
    let warnings = sink.warnings();
    assert_eq!(warnings[0].kind, WarningKind::ParseError);
    assert!(warnings[0].message.contains("07/01/2012"));
}

#[test]
fn malformed_key_on_unversioned_day_is_ignored() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let doc = with_day("lastSession", unversioned_day());
    assert_eq!(vod.exec(Some(&doc)).as_deref(), Some("15.0"));
    assert!(sink.is_empty());
}

#[test]
fn each_failing_call_warns_once() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let doc = with_day("2012-07-01", versioned_day(3, &["13.0"]));
    for _ in 0..3 {
        assert_eq!(vod.exec(Some(&doc)), None);
    }
    assert_eq!(sink.len(), 3);
}

#[test]
fn failure_does_not_affect_next_document() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    let bad = with_day("2012-07-01", versioned_day(3, &["13.0"]));
    let good = document(valid_days());

    assert_eq!(vod.exec(Some(&bad)), None);
    assert_eq!(vod.exec(Some(&good)).as_deref(), Some("15.0"));
    assert_eq!(sink.len(), 1);
}

#[test]
fn non_map_input_warns_and_is_absent() {
    let (vod, sink) = evaluator(Some("2012-10-22"));
    assert_eq!(vod.exec(Some(&Datum::bag_of_strs(["14.0"]))), None);
    assert_eq!(sink.len(), 1);
}
