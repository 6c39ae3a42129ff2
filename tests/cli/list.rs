use crate::cli::support::Fixture;
use predicates::prelude::*;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_empty() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No selections"));

    fx.cmd()
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_is_ordered_by_subject_then_year() {
    let fx = Fixture::new();
    fx.json(&["toggle", "year", "2023"]);
    fx.json(&["toggle", "cell", "Chemistry", "2018"]);
    fx.json(&["toggle", "cell", "Maths", "2024"]);

    let list = fx.json(&["list"]);
    assert_eq!(
        list,
        serde_json::json!([
            {"subject": "Chemistry", "year": "2018", "has_data": true},
            {"subject": "Maths", "year": "2023", "has_data": true},
            {"subject": "Maths", "year": "2024", "has_data": true},
            {"subject": "Physics", "year": "2023", "has_data": true}
        ])
    );
}

#[test]
fn test_list_marks_stale_selections() {
    let fx = Fixture::new();
    fx.json(&["toggle", "cell", "Physics", "2020"]);

    fx.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2020  Physics (no data)"));
}
