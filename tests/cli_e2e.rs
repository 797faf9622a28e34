#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "Order_ID,Customer_Name,Item_Purchased,Qty,Order_Date,Total($),Status";

fn orderinfo_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("orderinfo"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add_order(dir: &TempDir, customer: &str) -> assert_cmd::assert::Assert {
    orderinfo_cmd(dir)
        .args([
            "add",
            "--customer",
            customer,
            "--item",
            "Laptop",
            "--qty",
            "2",
            "--date",
            "01/05/2025",
            "--total",
            "1999.98",
            "--status",
            "shipped",
        ])
        .assert()
}

#[test]
fn test_add_then_list_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. First add creates the default data file
    add_order(&temp, "Jane Doe")
        .success()
        .stdout(predicate::str::contains("Order ID: 1001"))
        .stdout(predicate::str::contains("Records successfully saved"));

    let data_file = temp.path().join("OrderDetails.csv");
    let content = fs::read_to_string(&data_file).unwrap();
    assert!(content.starts_with(HEADER));
    assert!(content.contains("1001,Jane Doe,Laptop,2,01/05/2025,1999.98,Shipped"));

    // 2. Second add continues the id sequence
    add_order(&temp, "Ali")
        .success()
        .stdout(predicate::str::contains("Order ID: 1002"));

    // 3. List shows both
    orderinfo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Online Order Details"))
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("Ali"));

    let content = fs::read_to_string(&data_file).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_list_without_file_reports_no_records() {
    let temp = TempDir::new().unwrap();

    orderinfo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));
}

#[test]
fn test_list_empty_file_warns() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("OrderDetails.csv"), "").unwrap();

    orderinfo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The file is empty!"));
}

#[test]
fn test_delete_with_yes_rewrites_file() {
    let temp = TempDir::new().unwrap();
    add_order(&temp, "Jane Doe").success();
    add_order(&temp, "Ali").success();

    orderinfo_cmd(&temp)
        .args(["delete", "1001", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order ID: 1001 deleted successfully!"));

    let content = fs::read_to_string(temp.path().join("OrderDetails.csv")).unwrap();
    assert!(!content.contains("Jane Doe"));
    assert!(content.contains("1002,Ali"));
}

#[test]
fn test_delete_prompt_can_be_declined() {
    let temp = TempDir::new().unwrap();
    add_order(&temp, "Jane Doe").success();

    orderinfo_cmd(&temp)
        .args(["delete", "1001"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer   : Jane Doe"))
        .stdout(predicate::str::contains("Deletion cancelled."));

    let content = fs::read_to_string(temp.path().join("OrderDetails.csv")).unwrap();
    assert!(content.contains("Jane Doe"));
}

#[test]
fn test_delete_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    add_order(&temp, "Jane Doe").success();

    orderinfo_cmd(&temp)
        .args(["delete", "42", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Order ID: 42 not found."));
}

#[test]
fn test_invalid_field_is_rejected() {
    let temp = TempDir::new().unwrap();

    orderinfo_cmd(&temp)
        .args([
            "add",
            "--customer",
            "Jane",
            "--item",
            "Phone",
            "--qty",
            "0",
            "--date",
            "01/05/2025",
            "--total",
            "10",
            "--status",
            "Shipped",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quantity"));

    assert!(!temp.path().join("OrderDetails.csv").exists());
}

#[test]
fn test_malformed_file_fails_without_touching_it() {
    let temp = TempDir::new().unwrap();
    let data_file = temp.path().join("OrderDetails.csv");
    let original = format!("{}\n1001,Jane,Laptop,many,01/05/2025,10.00,Shipped\n", HEADER);
    fs::write(&data_file, &original).unwrap();

    orderinfo_cmd(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed row 1"));

    assert_eq!(fs::read_to_string(&data_file).unwrap(), original);
}

#[test]
fn test_file_option_overrides_config() {
    let temp = TempDir::new().unwrap();

    orderinfo_cmd(&temp)
        .args(["config", "data-file", "configured.csv"])
        .assert()
        .success();

    add_order(&temp, "Jane Doe").success();
    assert!(temp.path().join("configured.csv").exists());

    orderinfo_cmd(&temp)
        .args(["list", "--file", "nested/other.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));
    assert!(!temp.path().join("OrderDetails.csv").exists());
}

#[test]
fn test_config_first_order_id() {
    let temp = TempDir::new().unwrap();

    orderinfo_cmd(&temp)
        .args(["config", "first-order-id", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first-order-id set to 5000"));

    orderinfo_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("first-order-id = 5000"))
        .stdout(predicate::str::contains("data-file = OrderDetails.csv"));

    add_order(&temp, "Jane Doe")
        .success()
        .stdout(predicate::str::contains("Order ID: 5000"));
}

#[test]
fn test_menu_session_over_stdin() {
    let temp = TempDir::new().unwrap();
    add_order(&temp, "Jane Doe").success();

    orderinfo_cmd(&temp)
        .write_stdin("1\n2\n7\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu"))
        .stdout(predicate::str::contains("1 records successfully loaded"))
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains(
            "Please enter valid number (1 - 6) from the menu.",
        ));
}

#[test]
fn test_menu_add_appends_to_unloaded_file() {
    let temp = TempDir::new().unwrap();
    add_order(&temp, "Jane Doe").success();

    orderinfo_cmd(&temp)
        .arg("menu")
        .write_stdin("3\nBob\nPhone\n1\n03/06/2025\n499\nDelivered\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order ID: 1002"))
        .stdout(predicate::str::contains("New records successfully appended"));

    let content = fs::read_to_string(temp.path().join("OrderDetails.csv")).unwrap();
    assert_eq!(content.matches(HEADER).count(), 1);
    assert!(content.contains("1001,Jane Doe"));
    assert!(content.contains("1002,Bob,Phone,1,03/06/2025,499.00,Delivered"));
}
