use crate::cli::support::{scalecalc, Fixture};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Configuration and subject list tests
// ============================================================================

#[test]
fn test_config_file_in_working_directory() {
    let fx = Fixture::new();
    fs::write(
        fx.path().join("scalecalc.toml"),
        "data = \"rows.json\"\nstate = \"saved/state.json\"\n",
    )
    .unwrap();

    scalecalc()
        .current_dir(fx.path())
        .env_remove("SCALECALC_CONFIG")
        .args(["toggle", "subject", "Maths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subject Maths: checked"));

    assert!(fx.path().join("saved").join("state.json").exists());

    scalecalc()
        .current_dir(fx.path())
        .env_remove("SCALECALC_CONFIG")
        .args(["status", "Maths", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maths 2024: has data, selected"));
}

#[test]
fn test_explicit_config_resolves_relative_to_its_directory() {
    let fx = Fixture::new();
    let nested = fx.path().join("conf");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("calc.toml"), "data = \"../rows.json\"\n").unwrap();

    let other = tempfile::tempdir().unwrap();
    scalecalc()
        .current_dir(other.path())
        .arg("--config")
        .arg(nested.join("calc.toml"))
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 subjects"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    scalecalc()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_flags_override_config() {
    let fx = Fixture::new();
    fs::write(
        fx.path().join("scalecalc.toml"),
        "data = \"does-not-exist.json\"\n",
    )
    .unwrap();

    fx.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 subjects"));
}

#[test]
fn test_validation_list_restricts_subjects() {
    let fx = Fixture::new();
    let subjects = fx.write_names("subjects.json", &["Physics", "Maths", "Chemistry"]);
    let validation = fx.write_names("set-plan.json", &["Physics", "Maths", "Latin"]);

    let show = fx.json(&[
        "--subjects",
        subjects.to_str().unwrap(),
        "--validation",
        validation.to_str().unwrap(),
        "show",
    ]);
    assert_eq!(show["subject_count"], 2);
    let names: Vec<&str> = show["subjects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["subject"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Maths", "Physics"]);

    // Chemistry is outside the list, so 2018 has no eligible cells
    let year_2018 = show["years"]
        .as_array()
        .unwrap()
        .iter()
        .find(|y| y["year"] == "2018")
        .unwrap();
    assert_eq!(year_2018["state"], "disabled");
}
