//! Run command tests against JSON fixtures.

use predicates::prelude::*;

use super::helpers::{fixture, realloc_cmd};

#[test]
fn test_run_table_output() {
    realloc_cmd()
        .args(["run", &fixture("snapshot"), "--params", &fixture("params")])
        .assert()
        .success()
        .stdout(predicate::str::contains("sUSDe 86.5%"))
        .stdout(predicate::str::contains("WBTC 77%"))
        .stdout(predicate::str::contains("Total vault size: 900000"))
        .stdout(predicate::str::contains("Total Non-Idle Allocation"))
        .stdout(predicate::str::contains("Average Borrow Rate"));
}

#[test]
fn test_run_json_output() {
    let output = realloc_cmd()
        .args([
            "run",
            &fixture("snapshot"),
            "--params",
            &fixture("params"),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["total_vault_size"], 900_000);
    assert_eq!(payload["failures"].as_array().unwrap().len(), 0);

    let pools = payload["pools"].as_array().unwrap();
    assert_eq!(pools.len(), 2);

    // Active pool withdraws to the 90% utilization ceiling.
    assert_eq!(pools[0]["pool_key"], "sUSDe 86.5%");
    assert_eq!(pools[0]["final_allocation"], 144_444);
    assert_eq!(pools[0]["lltv"], 0.865);

    // Inactive pool withdraws to the 95% ceiling.
    assert_eq!(pools[1]["pool_key"], "WBTC 77%");
    assert_eq!(pools[1]["final_allocation"], 94_737);

    let overview = &payload["overview"];
    assert_eq!(overview["total_allocation"]["current"], 400_000.0);
}

#[test]
fn test_run_reports_pool_failures_without_aborting() {
    realloc_cmd()
        .args([
            "run",
            &fixture("snapshot_with_failure"),
            "--params",
            &fixture("params"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sUSDe 86.5%"))
        .stdout(predicate::str::contains("Broken 50%"))
        .stdout(predicate::str::contains("total supply is zero"));
}

#[test]
fn test_run_json_failures() {
    let output = realloc_cmd()
        .args([
            "run",
            &fixture("snapshot_with_failure"),
            "--params",
            &fixture("params"),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["pools"].as_array().unwrap().len(), 1);
    let failures = payload["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["pool_key"], "Broken 50%");
    assert_eq!(failures[0]["error"], "total supply is zero");
}

#[test]
fn test_run_invalid_params_fail_the_run() {
    realloc_cmd()
        .args([
            "run",
            &fixture("snapshot"),
            "--params",
            &fixture("params_invalid"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid policy"));
}

#[test]
fn test_run_custom_cohort_prefix() {
    let output = realloc_cmd()
        .args([
            "run",
            &fixture("snapshot"),
            "--params",
            &fixture("params"),
            "--cohort",
            "WBTC",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // WBTC holds half the current non-idle allocation.
    assert_eq!(payload["overview"]["cohort_share"]["current"], 0.5);
}
