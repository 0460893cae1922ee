//! CLI Integration Tests for arraykit
//!
//! Runs the built `arraykit` binary and checks its output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the arraykit binary built for this test run
fn arraykit_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_arraykit"))
}

/// Get a temp directory for test outputs
fn temp_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("arraykit_cli_tests");
    path.push(name);
    fs::create_dir_all(&path).expect("Failed to create temp dir");
    path
}

/// Run the binary from an empty directory so no stray arraykit.toml applies
fn run(args: &[&str]) -> Output {
    run_in(&temp_dir("default"), args)
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(arraykit_binary())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run arraykit")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "arraykit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn test_demo_all_sections() {
    let out = stdout(&run(&["demo"]));
    assert!(out.contains("Sum of array: 24"));
    assert!(out.contains("Binary search for 9: 5"));
    assert!(out.contains("Max subarray sum (Kadane's): 6"));
    assert!(out.contains("Merged in-place: [1, 2, 3, 4, 5, 6]"));
    assert!(out.contains("Missing number: 3"));
    assert!(out.contains("Majority element: 2"));
}

#[test]
fn test_demo_single_section() {
    let out = stdout(&run(&["demo", "--section", "competitive"]));
    assert!(out.contains("===== Competitive Algorithms ====="));
    assert!(!out.contains("===== Basic Algorithms ====="));
}

#[test]
fn test_demo_rejects_unknown_section() {
    let output = run(&["demo", "--section", "expert"]);
    assert!(!output.status.success());
}

// ============================================================================
// List
// ============================================================================

#[test]
fn test_list_text() {
    let out = stdout(&run(&["list", "--tier", "advanced"]));
    assert!(out.contains("kadane"));
    assert!(!out.contains("bubble-sort"));
}

#[test]
fn test_list_json() {
    let out = stdout(&run(&["list", "--json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let entries = parsed.as_array().expect("array");
    assert!(entries.iter().any(|e| e["name"] == "sort-012" && e["input"] == "flags"));
}

// ============================================================================
// Run
// ============================================================================

#[test]
fn test_run_with_values() {
    let out = stdout(&run(&["run", "kadane", "--values", "-2,1,-3,4,-1,2,1,-5,4"]));
    assert!(out.contains("=> 6"), "{}", out);
}

#[test]
fn test_run_json() {
    let out = stdout(&run(&[
        "run",
        "subarray-sum",
        "--values",
        "1,4,20,3,10,5",
        "--target",
        "33",
        "--json",
    ]));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(parsed["algorithm"], "subarray-sum");
    assert_eq!(parsed["outcome"]["kind"], "window");
    assert_eq!(parsed["outcome"]["range"], serde_json::json!([2, 4]));
}

#[test]
fn test_run_random_is_reproducible() {
    let args = ["run", "sort-012", "--random", "20", "--seed", "9", "--json"];
    let first = stdout(&run(&args));
    let second = stdout(&run(&args));
    assert_eq!(first, second);

    let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
    let sorted: Vec<i64> = parsed["outcome"]["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(sorted.len(), 20);
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_run_random_uses_configured_len() {
    let dir = temp_dir("random_len");
    fs::write(dir.join("arraykit.toml"), "[random]\nlen = 5\n").unwrap();

    let out = stdout(&run_in(&dir, &["run", "sum", "--random", "--json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(parsed["input"].as_array().unwrap().len(), 5);

    // An explicit count still wins
    let out = stdout(&run_in(&dir, &["run", "sum", "--random", "8", "--json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(parsed["input"].as_array().unwrap().len(), 8);
}

#[test]
fn test_run_find_missing_without_n() {
    let out = stdout(&run(&["run", "find-missing", "--values", "1,2,4,5,6"]));
    assert!(out.contains("=> 3"), "{}", out);
}

#[test]
fn test_run_reports_errors() {
    let output = run(&["run", "max-sum-window", "--values", "1,2", "-k", "5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("window size 5 is invalid"), "{}", stderr);

    let output = run(&["run", "bogo-sort", "--values", "1"]);
    assert!(!output.status.success());

    let output = run(&["run", "binary-search", "--values", "1,2,3", "--target", "9999999999"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("target 9999999999 is outside"), "{}", stderr);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_init_and_use() {
    let dir = temp_dir("config_init");
    let _ = fs::remove_file(dir.join("arraykit.toml"));

    let out = stdout(&run_in(&dir, &["config", "--init"]));
    assert!(out.contains("Created arraykit.toml"));
    assert!(dir.join("arraykit.toml").exists());

    // A second init refuses to overwrite
    assert!(!run_in(&dir, &["config", "--init"]).status.success());

    fs::write(
        dir.join("arraykit.toml"),
        "[demo]\nsections = [\"basic\"]\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let out = stdout(&run_in(&dir, &["demo"]));
    assert!(out.contains("===== Basic Algorithms ====="));
    assert!(!out.contains("===== Advanced Algorithms ====="));

    let out = stdout(&run_in(&dir, &["run", "sum", "--values", "1,2,3"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("config selects JSON");
    assert_eq!(parsed["outcome"]["value"], 6);
}
