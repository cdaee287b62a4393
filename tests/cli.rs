//! End-to-end tests for the `expenses` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn read_records(dir: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(dir.join("expenses.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn add_creates_file_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "--description", "Coffee", "--amount", "3.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"))
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("$3.50"));

    let records = read_records(temp_dir.path());
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["description"], "Coffee");
    assert_eq!(records[0]["amount"], 3.5);
    assert_eq!(records[0]["date"].as_str().unwrap().len(), 10);
}

#[test]
fn full_session() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    expenses(dir)
        .args(["add", "--description", "Coffee", "--amount", "3.50", "--date", "2024-03-02"])
        .assert()
        .success();
    expenses(dir)
        .args(["add", "--description", "Rent", "--amount", "1200", "--date", "2024-04-01"])
        .assert()
        .success();

    expenses(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee").and(predicate::str::contains("Rent")))
        .stdout(predicate::str::contains("2 expenses"));

    expenses(dir)
        .args(["summary", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses for March: $3.50"));

    expenses(dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted"))
        .stdout(predicate::str::contains("Coffee"));

    expenses(dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $1200.00 (1 recorded)"));

    let records = read_records(dir);
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["id"], 2);
}

#[test]
fn list_without_file_reports_no_records() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    assert!(!temp_dir.path().join("expenses.json").exists());
}

#[test]
fn delete_unknown_id_fails_softly() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["delete", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expense not found: 42"));
}

#[test]
fn bad_amount_is_rejected_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "--description", "Coffee", "--amount", "lots"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!temp_dir.path().join("expenses.json").exists());
}

#[test]
fn negative_amount_is_accepted() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "--description", "Refund", "--amount", "-5.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$5.50"));
}

#[test]
fn invalid_month_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["summary", "13"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 12"));
}

#[test]
fn month_without_records_is_distinct_from_zero_total() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    expenses(dir)
        .args(["add", "--description", "Gift", "--amount", "10", "--date", "2024-05-01"])
        .assert()
        .success();

    expenses(dir)
        .args(["summary", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded for March."));
}

#[test]
fn corrupt_file_warns_and_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("expenses.json"), "{ this is not json").unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."))
        .stderr(predicate::str::contains("starting with an empty expense list"));

    expenses(temp_dir.path())
        .args(["add", "--description", "Fresh start", "--amount", "1"])
        .assert()
        .success();

    let records = read_records(temp_dir.path());
    assert_eq!(records[0]["id"], 1);
}

#[test]
fn undecodable_record_is_skipped_not_the_whole_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("expenses.json"),
        r#"[
            {"id": 1, "date": "2024-01-01", "description": "Coffee", "amount": 3.5},
            {"id": 2, "date": "2024-01-02", "description": "Yacht", "amount": 1e30}
        ]"#,
    )
    .unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stderr(predicate::str::contains("record 2"));
}

#[test]
fn amounts_are_written_digit_for_digit() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "--description", "Fine", "--amount", "0.1234567890123456789"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
    assert!(raw.contains("0.1234567890123456789"));
}

#[test]
fn summary_past_decimal_range_fails_without_panicking() {
    let temp_dir = TempDir::new().unwrap();
    for _ in 0..2 {
        expenses(temp_dir.path())
            .args(["add", "--description", "Huge", "--amount", "79228162514264337593543950335"])
            .assert()
            .success();
    }

    expenses(temp_dir.path())
        .arg("summary")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Out of range"));
}

#[test]
fn custom_file_option() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["--file", "ledger/mine.json", "add", "--description", "Tea", "--amount", "2"])
        .assert()
        .success();

    assert!(temp_dir.path().join("ledger").join("mine.json").exists());
    assert!(!temp_dir.path().join("expenses.json").exists());
}

#[test]
fn unwritable_target_is_an_environment_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("blocker"), "x").unwrap();

    expenses(temp_dir.path())
        .args(["--file", "blocker/expenses.json", "add", "--description", "Tea", "--amount", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not save expenses"));
}

#[test]
fn unknown_fields_survive_a_rewrite() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("expenses.json"),
        r#"[{"id": 5, "date": "2024-01-10", "description": "Bus", "amount": 2.4, "tag": "commute"}]"#,
    )
    .unwrap();

    expenses(temp_dir.path())
        .args(["add", "--description", "Lunch", "--amount", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID:          6"));

    let records = read_records(temp_dir.path());
    assert_eq!(records[0]["tag"], "commute");
    assert_eq!(records[0]["amount"], 2.4);
    assert_eq!(records[1]["id"], 6);
}
