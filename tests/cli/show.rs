use crate::cli::support::Fixture;
use predicates::prelude::*;

// ============================================================================
// Show and status command tests
// ============================================================================

#[test]
fn test_show_human_grid() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 subjects"))
        .stdout(predicate::str::contains("'18"))
        .stdout(predicate::str::contains("'24"))
        .stdout(predicate::str::contains("[ ] Chemistry"))
        .stdout(predicate::str::contains("0 selected"));
}

#[test]
fn test_show_json_column_states() {
    let fx = Fixture::new();
    fx.json(&["toggle", "subject", "Physics"]);

    let show = fx.json(&["show"]);
    assert_eq!(show["subject_count"], 3);
    assert_eq!(show["selected"], 1);

    let years = show["years"].as_array().unwrap();
    let state_of = |year: &str| {
        years
            .iter()
            .find(|y| y["year"] == year)
            .map(|y| y["state"].clone())
            .unwrap()
    };
    // No subject has data for 2019: vacuously full, checkbox disabled
    assert_eq!(state_of("2019"), "disabled");
    assert_eq!(state_of("2023"), "partial");
    assert_eq!(state_of("2024"), "unchecked");
    assert_eq!(state_of("2018"), "unchecked");

    let physics = show["subjects"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["subject"] == "Physics")
        .unwrap();
    assert_eq!(physics["state"], "checked");
}

#[test]
fn test_show_records() {
    let fx = Fixture::new();
    fx.json(&["toggle", "cell", "Maths", "2024"]);

    fx.cmd()
        .args(["--format", "records", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("summary subjects=3 selected=1 stale=0"))
        .stdout(predicate::str::contains("year=2019 label='19 state=disabled"))
        .stdout(predicate::str::contains(
            "subject=\"Maths\" state=partial available=2023,2024 selected=2024",
        ));
}

#[test]
fn test_status_human() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["status", "Physics", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics 2024: no data, not selected"))
        .stdout(predicate::str::contains("subject Physics: unchecked"));
}
