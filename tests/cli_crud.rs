//! End-to-end CLI tests: full CRUD lifecycle over a temporary database.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn sev(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sev").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

fn create_hack_night(db: &Path) -> i64 {
    let output = sev(db)
        .args([
            "create",
            "--name",
            "Hack Night",
            "--description",
            "",
            "--type",
            "Workshop",
            "--schedule",
            "2025-11-09T14:30",
            "--prize",
            "500.00",
            "--venue",
            "3",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "create failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let id_text = stdout
        .trim()
        .strip_prefix("Created event #")
        .unwrap_or_else(|| panic!("unexpected create output: {stdout}"));
    id_text.parse().unwrap()
}

#[test]
fn full_crud_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("events.db");

    sev(&db).arg("init").assert().success();

    let id = create_hack_night(&db);
    assert!(id > 0);

    sev(&db)
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hack Night"))
        .stdout(predicate::str::contains("Workshop"))
        .stdout(predicate::str::contains("2025-11-09T14:30:00"))
        .stdout(predicate::str::contains("500.00"));

    sev(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hack Night"))
        .stdout(predicate::str::contains("1 event(s)"));

    sev(&db)
        .args([
            "update",
            &id.to_string(),
            "--name",
            "Hack Night 2",
            "--type",
            "Hackathon",
            "--schedule",
            "2025-12-01T10:00",
            "--prize",
            "750.25",
            "--venue",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated event #{id}")));

    sev(&db)
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hack Night 2"))
        .stdout(predicate::str::contains("750.25"));

    sev(&db)
        .args(["delete", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted event #{id}")));

    // Re-delete and lookup after delete are defined outcomes, not errors.
    sev(&db)
        .args(["delete", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No event matched id {id}")));

    sev(&db)
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No event found for id {id}")));
}

#[test]
fn commands_fail_without_init() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("missing.db");

    sev(&db)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn create_rejects_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("events.db");

    sev(&db).arg("init").assert().success();

    sev(&db)
        .args([
            "create",
            "--name",
            "  ",
            "--type",
            "Workshop",
            "--schedule",
            "2025-11-09T14:30",
            "--prize",
            "0.00",
            "--venue",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn json_output_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("events.db");

    sev(&db).arg("init").assert().success();
    let id = create_hack_night(&db);

    let output = sev(&db)
        .args(["--json", "show", &id.to_string()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let event: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(event["id"], serde_json::json!(id));
    assert_eq!(event["name"], serde_json::json!("Hack Night"));
    assert_eq!(event["type"], serde_json::json!("Workshop"));
    assert_eq!(event["venue_id"], serde_json::json!(3));

    let output = sev(&db).args(["--json", "list"]).output().unwrap();
    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 1);
}
