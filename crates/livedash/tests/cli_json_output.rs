//! Integration tests for CLI JSON output behavior
//!
//! These tests verify that --json produces valid, parseable JSON on stdout
//! with no log lines mixed in.

use std::process::{Command, Stdio};

fn run_livedash_json(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_livedash"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute livedash");

    assert!(
        output.status.success(),
        "livedash {} failed with exit code {:?}. stderr: {}",
        args.join(" "),
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_demo_snapshot_json_has_fixture_revenue() {
    let stdout = run_livedash_json(&["snapshot", "--demo", "--json"]);

    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(snapshot["revenue"]["current"], 3528198.72);
    assert_eq!(snapshot["revenue"]["trend"].as_array().map(Vec::len), Some(24));
    assert_eq!(snapshot["transactions"].as_array().map(Vec::len), Some(3));
    assert_eq!(snapshot["transactions"][2]["kind"], "refund");
}

#[test]
fn test_snapshot_json_has_no_log_lines() {
    let stdout = run_livedash_json(&["snapshot", "--demo", "--json"]);
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

#[test]
fn test_randomized_snapshot_json_shape() {
    let stdout = run_livedash_json(&["snapshot", "--json"]);

    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    let transactions = snapshot["transactions"]
        .as_array()
        .expect("transactions should be an array");
    assert_eq!(transactions.len(), 12);

    let current = snapshot["revenue"]["current"].as_f64().unwrap();
    assert!(current > 0.0);
}

/// Each published refresh is one JSON object per line.
#[test]
fn test_watch_json_emits_one_line_per_update() {
    let stdout = run_livedash_json(&[
        "watch",
        "--demo",
        "--json",
        "--live",
        "--interval-ms",
        "100",
        "--latency-ms",
        "10",
        "--updates",
        "2",
    ]);

    let updates: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("each line should be valid JSON"))
        .collect();

    assert_eq!(updates.len(), 2, "got: {}", stdout);
    assert_eq!(updates[0]["refresh_count"], 1);
    assert_eq!(updates[1]["refresh_count"], 2);
    assert_eq!(updates[1]["is_live"], true);
    assert_eq!(updates[0]["snapshot"]["revenue"]["current"], 3528198.72);
}
