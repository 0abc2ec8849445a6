//! End-to-end CLI tests for the `labs` binary.
//!
//! Each test runs the binary as a subprocess via `assert_cmd` from its own
//! temporary directory, so no stray `.labs/` config is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `labs` binary, isolated from
/// any config in the environment.
fn labs(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("labs").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LABS_DIR")
        .env_remove("LABS_CONFIG");
    cmd
}

/// Run with `args` and return stdout, asserting success.
fn stdout_of(dir: &TempDir, args: &[&str]) -> String {
    let output = labs(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "labs {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// Literal output of each exercise
// ---------------------------------------------------------------------------

#[test]
fn time_prints_hms() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(&tmp, &["time"]),
        "6500 seconds in hours, mins and secs = 1:48:20\n"
    );
}

#[test]
fn truncated_circle_prints_1200() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(&tmp, &["circle-truncated"]),
        "The area of a circle with a radius of 20 meters is: 1200m²\n"
    );
}

#[test]
fn exact_circle_two_decimals() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(&tmp, &["circle"]),
        "The area of a circle with a radius of 20 meters is: 1256.64m²\n"
    );
}

#[test]
fn cylinder_prints_area_and_volume() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(&tmp, &["cylinder"]),
        "The surface area of a cylinder with a radius of 20 cms and a height of 20 cms is: 5026.55cm²\n\
         The volume of a cylinder with a radius of 20 and a height of 20 is: 25132.74cm³\n"
    );
}

#[test]
fn powers_prints_table() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(&tmp, &["powers"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Number\tSquare\tCube");
    assert_eq!(lines[3], "3\t9.0\t27.0");
    assert_eq!(lines[5], "5\t25.0\t125.0");
}

#[test]
fn kepler_prints_formula_and_value() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(&tmp, &["kepler"]),
        "G = 4 x π² x (a³ / P² x (m1 + m2))\nG = 3197.751825952952\n"
    );
}

#[test]
fn lab_ids_are_aliases() {
    let tmp = TempDir::new().unwrap();
    for (alias, name) in [
        ("ex1q6", "powers"),
        ("ex1q7", "kepler"),
        ("ex1q8", "circle"),
        ("ex1q9", "cylinder"),
        ("ex1q10", "time"),
        ("ex1q13", "circle-truncated"),
    ] {
        assert_eq!(stdout_of(&tmp, &[alias]), stdout_of(&tmp, &[name]));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(stdout_of(&tmp, &["all"]), stdout_of(&tmp, &["all"]));
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[test]
fn flags_override_inputs() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(&tmp, &["time", "--secs", "3725"]),
        "3725 seconds in hours, mins and secs = 1:2:5\n"
    );
    assert_eq!(
        stdout_of(&tmp, &["circle-truncated", "--radius", "10"]),
        "The area of a circle with a radius of 10 meters is: 300m²\n"
    );
}

#[test]
fn config_file_overrides_inputs() {
    let tmp = TempDir::new().unwrap();
    let labs_dir = tmp.path().join(".labs");
    std::fs::create_dir(&labs_dir).unwrap();
    std::fs::write(
        labs_dir.join("config.yaml"),
        "inputs:\n  time:\n    secs: 60\n",
    )
    .unwrap();

    labs(&tmp)
        .arg("time")
        .assert()
        .success()
        .stdout("60 seconds in hours, mins and secs = 0:1:0\n");
}

#[test]
fn flag_beats_config_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("labs.yaml");
    std::fs::write(&path, "inputs:\n  time:\n    secs: 60\n").unwrap();

    labs(&tmp)
        .args(["--config", path.to_str().unwrap(), "time", "--secs", "7200"])
        .assert()
        .success()
        .stdout("7200 seconds in hours, mins and secs = 2:0:0\n");
}

#[test]
fn missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    labs(&tmp)
        .args(["--config", "does-not-exist.yaml", "time"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("config file not found"));
}

// ---------------------------------------------------------------------------
// Catalog and utilities
// ---------------------------------------------------------------------------

#[test]
fn all_separates_exercises_with_blank_lines() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(&tmp, &["all"]);
    assert!(out.starts_with("Number\tSquare\tCube\n"));
    assert!(out.contains("125.0\n\nG = 4 x π²"));
    assert!(out.ends_with("1:48:20\n\nThe area of a circle with a radius of 20 meters is: 1200m²\n"));
}

#[test]
fn all_json_is_array_of_reports() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(&tmp, &["all", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = json.as_array().expect("all --json should return array");
    assert_eq!(arr.len(), 6);
    assert_eq!(arr[0]["exercise"], "powers");
    assert_eq!(arr[5]["exercise"], "circle-truncated");
    assert_eq!(arr[5]["result"]["area"], 1200);
}

#[test]
fn json_single_exercise() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(&tmp, &["kepler", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["exercise"], "kepler");
    assert_eq!(json["result"]["g"].as_f64().unwrap(), 3197.751825952952);
    assert_eq!(json["result"]["period"].as_f64().unwrap(), 2.0);
}

#[test]
fn list_shows_every_exercise() {
    let tmp = TempDir::new().unwrap();
    labs(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("circle-truncated"))
        .stdout(predicate::str::contains("ex1q13"));
}

#[test]
fn version_prints_package_version() {
    let tmp = TempDir::new().unwrap();
    labs(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "labs version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn completion_generates_script() {
    let tmp = TempDir::new().unwrap();
    labs(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("labs"));
}

#[test]
fn no_subcommand_prints_help() {
    let tmp = TempDir::new().unwrap();
    labs(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let tmp = TempDir::new().unwrap();
    labs(&tmp)
        .args(["-v", "time"])
        .assert()
        .success()
        .stdout("6500 seconds in hours, mins and secs = 1:48:20\n");
}
