use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use rust_decimal::Decimal;
use std::process::Command;
use std::str::FromStr;

const FIXTURE: &str = "tests/fixtures/orders.csv";

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("orderlens"));
    cmd.arg(FIXTURE);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "category,count\ntoys,3\n,1\nbooks,1\ngarden,1\n",
        ))
        .stdout(predicate::str::contains(
            "day,order_count\n2023-01-01,1\n2023-01-02,1\n2023-01-03,0\n2023-01-04,1\n2023-01-05,2\n",
        ))
        .stdout(predicate::str::contains(
            "state,order_count\nRJ,2\nSP,2\nMG,1\n",
        ))
        .stdout(predicate::str::contains("101,3,38.50,0"))
        .stdout(predicate::str::contains("102,1,35.00,3"))
        .stdout(predicate::str::contains("total_orders,5"));

    Ok(())
}

#[test]
fn test_cli_date_range() {
    let mut cmd = Command::new(cargo_bin!("orderlens"));
    cmd.arg(FIXTURE)
        .args(["--start", "2023-01-02", "--end", "2023-01-04"])
        .args(["--view", "rfm"]);

    cmd.assert().success().stdout(predicate::eq(
        "customer_idx,frequency,monetary,recency\n102,1,35.00,2\n103,1,12.00,0\n",
    ));
}

#[test]
fn test_cli_pad_days() {
    let mut cmd = Command::new(cargo_bin!("orderlens"));
    cmd.arg(FIXTURE)
        .args(["--start", "2023-01-03", "--end", "2023-01-03"])
        .args(["--pad-days", "1", "--view", "daily"]);

    cmd.assert().success().stdout(predicate::eq(
        "day,order_count\n2023-01-02,1\n2023-01-03,0\n2023-01-04,1\n",
    ));
}

#[test]
fn test_cli_inverted_range_is_empty() {
    let mut cmd = Command::new(cargo_bin!("orderlens"));
    cmd.arg(FIXTURE)
        .args(["--start", "2023-01-05", "--end", "2023-01-01"])
        .args(["--view", "categories"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq("category,count\n"))
        .stderr(predicate::str::contains("inverted"));
}

#[test]
fn test_cli_json_summary() {
    let output = Command::new(cargo_bin!("orderlens"))
        .arg(FIXTURE)
        .args(["--format", "json", "--view", "summary", "--top", "2"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_orders"], 5);
    assert_eq!(summary["categories"]["most"][0]["category"], "toys");
    assert_eq!(summary["categories"]["most"].as_array().unwrap().len(), 2);
    assert_eq!(summary["top_states"][0]["state"], "RJ");
    assert_eq!(summary["rfm"]["customers"], 4);

    let avg_monetary = summary["rfm"]["avg_monetary"].as_str().unwrap();
    assert_eq!(
        Decimal::from_str(avg_monetary).unwrap(),
        Decimal::from_str("46.35").unwrap()
    );
    assert_eq!(
        summary["best_customers"]["by_monetary"][0]["customer_idx"],
        "104"
    );
}
