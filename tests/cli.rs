use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, description: &str, amount: &str, category: Option<&str>) -> assert_cmd::assert::Assert {
    let mut cmd = tracker(dir);
    cmd.args(["add", "--description", description, "--amount", amount]);
    if let Some(category) = category {
        cmd.args(["--category", category]);
    }
    cmd.assert()
}

fn stored_ids(dir: &TempDir) -> Vec<u64> {
    let contents = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn add_list_delete_flow() {
    let dir = TempDir::new().unwrap();

    add(&dir, "Coffee", "4.5", Some("food"))
        .success()
        .stdout(contains("Expense added successfully (ID: 1)"));
    add(&dir, "Book", "20", None)
        .success()
        .stdout(contains("(ID: 2)"));

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("$4.50")).and(contains("Book")));

    tracker(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Expense deleted successfully"));

    add(&dir, "Pen", "1.2", None).success().stdout(contains("(ID: 3)"));
    assert_eq!(stored_ids(&dir), vec![2, 3]);
}

#[test]
fn expense_file_format() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", Some("food")).success();

    let contents = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1,
            "date": today,
            "description": "Coffee",
            "amount": 4.5,
            "category": "food"
        }])
    );
    assert!(contents.contains("\n  {"));
}

#[test]
fn invalid_amount_is_reported_without_failing() {
    let dir = TempDir::new().unwrap();

    add(&dir, "Nothing", "0", None)
        .success()
        .stdout(contains("Error: Amount must be a positive number."));
    add(&dir, "Refund", "-5", None)
        .success()
        .stdout(contains("Error: Amount must be a positive number."));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn update_and_not_found() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", Some("food")).success();

    tracker(&dir)
        .args(["update", "--id", "1", "--description", "Espresso", "--amount", "3"])
        .assert()
        .success()
        .stdout(contains("Expense updated successfully"));

    tracker(&dir)
        .args(["list"])
        .assert()
        .stdout(contains("Espresso").and(contains("$3.00")).and(contains("food")));

    tracker(&dir)
        .args(["update", "--id", "9", "--amount", "3"])
        .assert()
        .success()
        .stdout(contains("Error: Expense with ID 9 not found."));

    tracker(&dir)
        .args(["delete", "--id", "9"])
        .assert()
        .success()
        .stdout(contains("Error: Expense with ID 9 not found."));

    let before = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    tracker(&dir)
        .args(["update", "--id", "1", "--description", "Changed", "--amount", "-1"])
        .assert()
        .success()
        .stdout(contains("Error: Amount must be a positive number."));
    let after = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn list_by_category() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", Some("food")).success();
    add(&dir, "Book", "20", Some("books")).success();

    tracker(&dir)
        .args(["list", "--category", "food"])
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("Book").not()));

    tracker(&dir)
        .args(["list", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found."));

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total expenses: $0.00"));
}

#[test]
fn budget_warning_on_add_and_summary() {
    let dir = TempDir::new().unwrap();
    let month = Local::now().month();
    let month_name = Local::now().format("%B").to_string();
    let warning = format!(
        "Warning: You have exceeded your budget ($100.00) for {}.",
        month_name
    );

    tracker(&dir)
        .args(["set-budget", "--month", &month.to_string(), "--amount", "100"])
        .assert()
        .success()
        .stdout(contains(format!("Budget of $100.00 set for month {}.", month_name)));

    add(&dir, "Groceries", "50", None)
        .success()
        .stdout(contains("Warning").not());
    add(&dir, "Dinner", "40", None)
        .success()
        .stdout(contains("Warning").not());
    add(&dir, "Concert", "30", None)
        .success()
        .stdout(contains(warning.clone()));

    tracker(&dir)
        .args(["summary", "--month", &month.to_string()])
        .assert()
        .success()
        .stdout(
            contains(format!("Total expenses for {}: $120.00", month_name))
                .and(contains(warning)),
        );

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total expenses: $120.00").and(contains("Warning").not()));
}

#[test]
fn set_budget_rejects_bad_input() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["set-budget", "--month", "6", "--amount", "0"])
        .assert()
        .success()
        .stdout(contains("Error: Budget amount must be positive."));
    assert!(!dir.path().join("budget.json").exists());

    tracker(&dir)
        .args(["set-budget", "--month", "13", "--amount", "10"])
        .assert()
        .failure();
}

#[test]
fn show_budget() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["show-budget", "--month", "6"])
        .assert()
        .success()
        .stdout(contains("No budget set for June."));

    tracker(&dir)
        .args(["set-budget", "--month", "6", "--amount", "100"])
        .assert()
        .success();

    tracker(&dir)
        .args(["show-budget", "--month", "6"])
        .assert()
        .success()
        .stdout(contains("Budget for June: $100.00"));

    tracker(&dir)
        .arg("show-budget")
        .assert()
        .success()
        .stdout(contains("June").and(contains("$100.00")));

    let contents = std::fs::read_to_string(dir.path().join("budget.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value, serde_json::json!({"6": 100.0}));
}

#[test]
fn export_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    tracker(&dir)
        .args(["export-csv", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("No expenses to export."));
    assert!(!out.exists());

    add(&dir, "Coffee", "4.5", Some("food")).success();
    add(&dir, "Book", "20", None).success();

    tracker(&dir)
        .args(["export-csv", out.to_str().unwrap(), "--category", "food"])
        .assert()
        .success()
        .stdout(contains("Exported expenses to"));

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines[0], "id,date,description,amount,category");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("1,"));
    assert!(lines[1].ends_with(",Coffee,4.5,food"));
}

#[test]
fn export_with_no_match_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");
    std::fs::write(&out, "keep me").unwrap();
    add(&dir, "Coffee", "4.5", Some("food")).success();

    tracker(&dir)
        .args(["export-csv", out.to_str().unwrap(), "--category", "travel"])
        .assert()
        .success()
        .stdout(contains("No expenses to export."));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    tracker(&env_dir)
        .args(["--data-dir", flag_dir.path().to_str().unwrap()])
        .args(["add", "--description", "Coffee", "--amount", "4.5"])
        .assert()
        .success();

    assert!(flag_dir.path().join("expenses.json").exists());
    assert!(!env_dir.path().join("expenses.json").exists());
}

#[test]
fn corrupt_expense_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("expenses.json"), "not json").unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Failed to parse"));
}

#[test]
fn corrupt_budget_file_only_blocks_budget_commands() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("budget.json"), "oops").unwrap();
    std::fs::write(dir.path().join("expenses.json"), "[]").unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found."));

    tracker(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Error: Expense with ID 1 not found."));

    tracker(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("budget.json"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("budget.json")).unwrap(),
        "oops"
    );
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("expenses.json").and(contains("Currency symbol: $")));
}

#[test]
fn currency_symbol_from_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();
    add(&dir, "Coffee", "4.5", None).success();

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total expenses: €4.50"));
}
