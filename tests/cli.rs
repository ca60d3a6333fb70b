//! End-to-end tests for the wealthwise binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wealthwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wealthwise").unwrap();
    cmd.env("WEALTHWISE_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_then_overview_shows_demo_budget() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo budget"));

    wealthwise(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Overview - April 2025"))
        .stdout(predicate::str::contains("Dining Out"))
        .stdout(predicate::str::contains("Spent: $3200.00 (64%)"));
}

#[test]
fn spending_past_threshold_raises_alert() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .args(["category", "spend", "Health", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(50% -> 117%)"))
        .stdout(predicate::str::contains(
            "Alert: Health category is at 117% of budget",
        ));

    wealthwise(&dir)
        .args(["alert", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health category is at 117% of budget"));

    // Already above the threshold: no second alert
    wealthwise(&dir)
        .args(["category", "spend", "Health", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alert:").not());
}

#[test]
fn spend_on_unknown_category_fails() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .args(["category", "spend", "Nope", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Nope"));
}

#[test]
fn spend_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .args(["category", "spend", "Travel", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn goal_add_and_update() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .args(["goal", "add", "Boat", "--target", "1000", "--current", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal #5"))
        .stdout(predicate::str::contains("(25%)"));

    wealthwise(&dir)
        .args(["goal", "update", "goal-5", "--current", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(50%)"));

    wealthwise(&dir)
        .args(["goal", "update", "5", "--current", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds target"));
}

#[test]
fn dismissing_missing_alert_is_a_no_op() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .args(["alert", "dismiss", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to dismiss"));

    wealthwise(&dir)
        .args(["alert", "dismiss", "alert-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dismissed alert #1"));
}

#[test]
fn export_then_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("snapshot.json");

    wealthwise(&dir)
        .args(["category", "add", "Pets", "--allocated", "80"])
        .assert()
        .success();

    wealthwise(&dir)
        .arg("export")
        .arg("--output")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported budget to"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(json["categories"].as_array().unwrap().len(), 7);
    assert!(json["exportDate"].is_string());

    let other = TempDir::new().unwrap();
    wealthwise(&other)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("7 categories"));

    wealthwise(&other)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"));
}

#[test]
fn malformed_import_fails_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.json");
    fs::write(&file, r#"{"categories": [{"name": "X", "allocated": -5, "spent": 0}]}"#).unwrap();

    wealthwise(&dir)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));

    wealthwise(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn recommend_uses_income() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .arg("recommend")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended model: conservative"));

    wealthwise(&dir)
        .args(["income", "--savings-rate", "150"])
        .assert()
        .failure();
}

#[test]
fn changes_are_audited() {
    let dir = TempDir::new().unwrap();

    wealthwise(&dir)
        .args(["month", "set-current", "May 2025"])
        .assert()
        .success();

    wealthwise(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Overview currentMonth"));
}
