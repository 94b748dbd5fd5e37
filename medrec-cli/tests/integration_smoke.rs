//! Smoke tests driving the medrec binary against a temporary SQLite file

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Ward {
    dir: TempDir,
    url: String,
}

impl Ward {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("ward.db").display());
        Self { dir, url }
    }

    /// A database that can never be opened
    fn unreachable() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!(
            "sqlite://{}",
            dir.path().join("no-such-dir").join("ward.db").display()
        );
        Self { dir, url }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("medrec").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("DATABASE_URL")
            .env("RUST_LOG", "off")
            .env("MEDREC_QUIET", "1")
            .arg("--config")
            .arg(self.dir.path().join("absent.toml"))
            .arg("--database-url")
            .arg(&self.url);
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().arg("--json").args(args).output().unwrap();
        assert!(output.status.success(), "{:?} failed: {:?}", args, output);
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn add_patient(&self, name: &str, contact: &str) {
        self.cmd()
            .args(["add-patient", "--name", name, "--age", "30", "--gender", "Female"])
            .args(["--contact", contact, "--address", "1 Ward Street"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Patient added successfully"));
    }
}

// === Help Tests ===

#[test]
fn test_top_level_help_lists_screens() {
    let mut cmd = Command::cargo_bin("medrec").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("add-patient"))
        .stdout(predicate::str::contains("update-patient"))
        .stdout(predicate::str::contains("record"));
}

#[test]
fn test_add_patient_help() {
    let mut cmd = Command::cargo_bin("medrec").unwrap();
    cmd.arg("add-patient").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("exactly 10 digits"));
}

#[test]
fn test_history_add_help() {
    let mut cmd = Command::cargo_bin("medrec").unwrap();
    cmd.arg("history").arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Diagnosis"));
}

#[test]
fn test_home_screen() {
    Ward::new()
        .cmd()
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Hospital Management System"));
}

// === Error Reporting ===

#[test]
fn test_invalid_contact_rejected_before_connecting() {
    Ward::unreachable()
        .cmd()
        .args(["add-patient", "--name", "Ada", "--age", "30", "--gender", "Female"])
        .args(["--contact", "12345abcde"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contact: must be exactly 10 digits"))
        .stderr(predicate::str::contains("connection").not());
}

#[test]
fn test_blank_name_rejected() {
    Ward::unreachable()
        .cmd()
        .args(["add-patient", "--name", "   ", "--age", "30", "--gender", "Male"])
        .args(["--contact", "0123456789"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));
}

#[test]
fn test_unreachable_database_is_one_line_connection_error() {
    let output = Ward::unreachable().cmd().arg("patients").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("✗ connection error"), "stderr: {stderr}");
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr: {stderr}");
}

#[test]
fn test_check_reports_connection() {
    let ward = Ward::new();
    ward.cmd()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Connected to"));

    Ward::unreachable()
        .cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("connection error"));
}

// === Record Lifecycle ===

#[test]
fn test_patient_lifecycle_keeps_orphans() {
    let ward = Ward::new();
    ward.cmd().arg("init").assert().success();
    ward.add_patient("Mary Seacole", "0123456789");

    let patients = ward.json(&["patients"]);
    assert_eq!(patients.as_array().unwrap().len(), 1);
    assert_eq!(patients[0]["name"], "Mary Seacole");
    assert_eq!(patients[0]["contact"], "0123456789");
    assert_eq!(patients[0]["gender"], "Female");
    let id = patients[0]["id"].as_i64().unwrap().to_string();

    ward.cmd()
        .args(["history", "list", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no rows)"));

    ward.cmd()
        .args(["history", "add", &id, "--diagnosis", "Fracture", "--medications", "Ibuprofen"])
        .assert()
        .success();
    ward.cmd()
        .args(["treatment", "add", &id, "--description", "Cast"])
        .args(["--start", "2024-05-01", "--end", "2024-06-12"])
        .assert()
        .success();
    ward.cmd()
        .args(["billing", "add", &id, "--amount", "75.25", "--status", "Paid"])
        .assert()
        .success();

    let record = ward.json(&["record", &id]);
    assert_eq!(record["patient"]["name"], "Mary Seacole");
    assert_eq!(record["history"][0]["diagnosis"], "Fracture");
    assert_eq!(record["treatments"][0]["start_date"], "2024-05-01");
    assert_eq!(record["bills"][0]["amount"], 75.25);

    ward.cmd()
        .args(["record", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Info"))
        .stdout(predicate::str::contains("Billing Info"));

    ward.cmd().args(["delete-patient", &id]).assert().success();

    assert_eq!(ward.json(&["patients"]).as_array().unwrap().len(), 0);
    assert_eq!(ward.json(&["history", "list", &id]).as_array().unwrap().len(), 1);
    assert_eq!(ward.json(&["treatment", "list", &id]).as_array().unwrap().len(), 1);
    assert_eq!(ward.json(&["billing", "list", &id]).as_array().unwrap().len(), 1);
}

#[test]
fn test_update_with_invalid_contact_changes_nothing() {
    let ward = Ward::new();
    ward.cmd().arg("init").assert().success();
    ward.add_patient("Clara", "2222222222");

    let before = ward.json(&["patients"]);
    let id = before[0]["id"].as_i64().unwrap().to_string();

    ward.cmd()
        .args(["update-patient", &id, "--name", "Clara Barton", "--contact", "22-22"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contact"));
    assert_eq!(ward.json(&["patients"]), before);

    ward.cmd()
        .args(["update-patient", &id, "--age", "31"])
        .assert()
        .success();
    let after = ward.json(&["patients"]);
    assert_eq!(after[0]["age"], 31);
    assert_eq!(after[0]["name"], "Clara");
}

#[test]
fn test_child_row_for_missing_patient_fails() {
    let ward = Ward::new();
    ward.cmd().arg("init").assert().success();

    ward.cmd()
        .args(["billing", "add", "999", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("patient 999 does not exist"));
}

#[test]
fn test_delete_unknown_patient_fails() {
    let ward = Ward::new();
    ward.cmd().arg("init").assert().success();

    ward.cmd()
        .args(["delete-patient", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("patient 12 not found"));
}

#[test]
fn test_patient_ids_listing() {
    let ward = Ward::new();
    ward.cmd().arg("init").assert().success();
    ward.add_patient("Ada", "0123456789");
    ward.add_patient("Grace", "9876543210");

    let ids = ward.json(&["patients", "--ids"]);
    let ids: Vec<i64> = ids
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids[0] < ids[1]);

    ward.cmd()
        .args(["patients", "--ids"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", ids[0], ids[1]));
}
