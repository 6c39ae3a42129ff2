use crate::cli::support::{scalecalc, Fixture};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Toggle command tests
// ============================================================================

#[test]
fn test_toggle_subject_selects_only_cells_with_data() {
    let fx = Fixture::new();

    let out = fx.json(&["toggle", "subject", "Physics"]);
    assert_eq!(out["operation"], "subject");
    assert_eq!(out["state"], "checked");
    assert_eq!(out["selected"], 1);
    assert_eq!(out["added"], 1);

    let status = fx.json(&["status", "Physics", "2023"]);
    assert_eq!(status["selected"], true);
    assert_eq!(status["subject_fully_selected"], true);
    assert_eq!(status["year_fully_selected"], false);
    assert_eq!(status["year_state"], "partial");

    let status = fx.json(&["status", "Physics", "2024"]);
    assert_eq!(status["has_data"], false);
    assert_eq!(status["selected"], false);
}

#[test]
fn test_toggle_year_twice_selects_then_clears_column() {
    let fx = Fixture::new();
    fx.json(&["toggle", "cell", "Maths", "2023"]);

    let out = fx.json(&["toggle", "year", "2023"]);
    assert_eq!(out["state"], "checked");
    assert_eq!(out["selected"], 2);
    assert_eq!(out["added"], 1);

    let out = fx.json(&["toggle", "year", "2023"]);
    assert_eq!(out["state"], "unchecked");
    assert_eq!(out["selected"], 0);
    assert_eq!(out["removed"], 2);
}

#[test]
fn test_toggle_cell_twice_restores_state() {
    let fx = Fixture::new();

    let out = fx.json(&["toggle", "cell", "Maths", "2024"]);
    assert_eq!(out["cell_selected"], true);
    let out = fx.json(&["toggle", "cell", "Maths", "2024"]);
    assert_eq!(out["cell_selected"], false);
    assert_eq!(out["selected"], 0);
}

#[test]
fn test_state_file_is_written() {
    let fx = Fixture::new();
    fx.json(&["toggle", "subject", "Maths"]);

    let state: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&fx.state).unwrap()).unwrap();
    assert_eq!(state["version"], 1);
    assert!(state["saved_at"].is_string());
    assert_eq!(
        state["selections"],
        serde_json::json!([
            {"subject": "Maths", "year": "2023"},
            {"subject": "Maths", "year": "2024"}
        ])
    );
}

#[test]
fn test_direct_toggle_without_data_is_stale_until_pruned() {
    let fx = Fixture::new();
    fx.json(&["toggle", "cell", "Physics", "2024"]);

    let show = fx.json(&["show"]);
    assert_eq!(
        show["stale"],
        serde_json::json!([{"subject": "Physics", "year": "2024"}])
    );

    let out = fx.json(&["prune"]);
    assert_eq!(out["removed"], 1);
    assert_eq!(out["selected"], 0);

    let show = fx.json(&["show"]);
    assert_eq!(show["stale"], serde_json::json!([]));
}

#[test]
fn test_clear_empties_selection() {
    let fx = Fixture::new();
    fx.json(&["toggle", "year", "2023"]);

    fx.cmd()
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared all selections"))
        .stdout(predicate::str::contains("0 selected"));

    let list = fx.json(&["list"]);
    assert_eq!(list, serde_json::json!([]));
}

#[test]
fn test_unknown_year_is_a_no_op() {
    let fx = Fixture::new();
    let out = fx.json(&["toggle", "year", "1999"]);
    assert_eq!(out["selected"], 0);
    assert_eq!(out["state"], "disabled");
}

#[test]
fn test_toggle_requires_state_path() {
    let fx = Fixture::new();

    scalecalc()
        .current_dir(fx.path())
        .env_remove("SCALECALC_CONFIG")
        .arg("--data")
        .arg(&fx.data)
        .args(["toggle", "year", "2023"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--state"));
}

#[test]
fn test_records_output() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["--format", "records", "toggle", "subject", "Maths"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "toggle subject subject=\"Maths\" selected=2 added=2 removed=0",
        ));
}
