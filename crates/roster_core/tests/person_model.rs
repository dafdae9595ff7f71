use chrono::{TimeZone, Utc};
use roster_core::{parse_person, Person, PersonParseError};
use serde_json::json;

#[test]
fn new_person_sets_created_at() {
    let before = Utc::now();
    let person = Person::new("Alice Johnson", 30, "alice@example.com");
    let after = Utc::now();

    let created_at = person.created_at.unwrap();
    assert!(created_at >= before && created_at <= after);
    assert_eq!(person.name, "Alice Johnson");
    assert_eq!(person.age, 30);
    assert_eq!(person.email, "alice@example.com");
}

#[test]
fn with_created_at_keeps_supplied_timestamp() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
    let person = Person::with_created_at("Bob Smith", 25, "bob@test.org", Some(ts));
    assert_eq!(person.created_at, Some(ts));
}

#[test]
fn with_created_at_fills_missing_timestamp() {
    let person = Person::with_created_at("Bob Smith", 25, "bob@test.org", None);
    assert!(person.created_at.is_some());
}

#[test]
fn is_adult_boundary() {
    assert!(Person::new("Eighteen", 18, "e@x.org").is_adult());
    assert!(!Person::new("Seventeen", 17, "s@x.org").is_adult());
    assert!(!Person::new("Zero", 0, "z@x.org").is_adult());
}

#[test]
fn display_includes_email_and_status() {
    let person = Person::new("Carol Davis", 35, "carol@company.com");
    assert_eq!(
        person.to_string(),
        "Carol Davis (35) - carol@company.com [adult]"
    );
}

#[test]
fn parse_person_accepts_complete_object() {
    let value = json!({
        "name": "Dana",
        "email": "dana@x.org",
        "age": 16,
        "created_at": "2026-02-13T10:00:00Z"
    });

    let person = parse_person(&value).unwrap();
    assert_eq!(person.name, "Dana");
    assert_eq!(person.age, 16);
    assert!(!person.is_adult());
    assert_eq!(
        person.created_at,
        Some(Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap())
    );
}

#[test]
fn parse_person_defaults_null_created_at() {
    let value = json!({ "name": "Eve", "email": "eve@x.org", "age": 40, "created_at": null });
    assert!(parse_person(&value).unwrap().created_at.is_some());
}

#[test]
fn parse_person_rejects_wrong_types() {
    let err = parse_person(&json!({ "name": 7, "email": "x@x", "age": 1 })).unwrap_err();
    assert_eq!(
        err,
        PersonParseError::InvalidField {
            field: "name",
            expected: "a string",
        }
    );

    let err = parse_person(&json!({ "name": "X", "email": "x@x", "age": "ten" })).unwrap_err();
    assert!(err.to_string().contains("`age`"), "unexpected error: {err}");

    let err = parse_person(&json!({
        "name": "X",
        "email": "x@x",
        "age": 3,
        "created_at": "yesterday"
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        PersonParseError::InvalidField {
            field: "created_at",
            ..
        }
    ));
}

#[test]
fn parse_person_reports_missing_age() {
    let err = parse_person(&json!({ "name": "X", "email": "x@x" })).unwrap_err();
    assert_eq!(err, PersonParseError::MissingField("age"));
    assert_eq!(err.to_string(), "missing required field `age`");
}
