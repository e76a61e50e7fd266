//! Integration tests for the chain-reaction CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn cli() -> Command {
    Command::cargo_bin("chain-reaction").unwrap()
}

#[test]
fn test_reduce_single_file() {
    cli()
        .arg("reduce")
        .arg("-i")
        .arg(fixture_path("drop.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("drop.csv: 90"));
}

#[test]
fn test_reduce_glob_pattern() {
    cli()
        .args(["reduce", "-q", "-i"])
        .arg(fixture_path("*.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("drop.csv: 90"))
        .stdout(predicate::str::contains("fan_in.csv: 300"))
        .stdout(predicate::str::contains("merge.csv: 110"))
        .stdout(predicate::str::contains("multi_subtree.csv: 150"))
        .stdout(predicate::str::contains("single.csv: 50"))
        .stdout(predicate::str::contains("cycle.csv").not());
}

#[test]
fn test_explain_prints_steps() {
    cli()
        .args(["reduce", "--explain", "-i"])
        .arg(fixture_path("merge.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("merge.csv: 110"))
        .stdout(predicate::str::contains("swap   #2 adds 60 from #1, carries 50"))
        .stdout(predicate::str::contains("root   #0 adds 50"));
}

#[test]
fn test_json_output() {
    cli()
        .args(["reduce", "-f", "json", "-i"])
        .arg(fixture_path("merge.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 110"))
        .stdout(predicate::str::contains("\"swaps\": 1"))
        .stdout(predicate::str::contains("\"steps\"").not());
}

#[test]
fn test_markdown_output() {
    cli()
        .args(["reduce", "-f", "markdown", "-i"])
        .arg(fixture_path("fan_in.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Source | Total |"))
        .stdout(predicate::str::contains("| 300 |"))
        .stdout(predicate::str::contains("*Total workloads: 1*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    cli()
        .args(["reduce", "-i"])
        .arg(fixture_path("multi_subtree.csv"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("multi_subtree.csv: 150"));
}

#[test]
fn test_config_file_sets_format_and_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("chain.toml");
    let input = temp_dir.path().join("semicolon.csv");
    fs::write(
        &config,
        "[input]\nhas_header = false\ndelimiter = \";\"\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();
    fs::write(&input, "50;0\n40;1\n").unwrap();

    cli()
        .args(["reduce", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\":50"));
}

#[test]
fn test_cycle_rejected_by_default() {
    cli()
        .args(["reduce", "-i"])
        .arg(fixture_path("invalid/cycle.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target 1 at index 1"));
}

#[test]
fn test_cycle_reduced_under_bounds_policy() {
    cli()
        .args(["reduce", "--validation", "bounds", "-i"])
        .arg(fixture_path("invalid/cycle.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle.csv: 20"));
}

#[test]
fn test_out_of_range_target() {
    cli()
        .args(["reduce", "--validation", "bounds", "-i"])
        .arg(fixture_path("invalid/out_of_range.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_malformed_csv() {
    cli()
        .args(["reduce", "-i"])
        .arg(fixture_path("invalid/not_a_number.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_invalid_file() {
    cli()
        .args(["reduce", "-i", "nonexistent.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_zero_threads_rejected() {
    cli()
        .args(["reduce", "-t", "0", "-i"])
        .arg(fixture_path("single.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be greater than 0"));
}

#[test]
fn test_validate_command() {
    cli()
        .args(["validate", "-i"])
        .arg(fixture_path("*.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("strict policy"))
        .stdout(predicate::str::contains("(10 elements)"));

    cli()
        .args(["validate", "-i"])
        .arg(fixture_path("invalid/*.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Validation failed for 3 of 3"));
}

#[test]
fn test_bench_command() {
    cli()
        .args(["bench", "-q", "-n", "5000", "-r", "3", "-s", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[RUN    ] Reduce random forest: n=5000"))
        .stdout(predicate::str::contains("[EVAL   ] mean"));
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("chain.toml");

    cli()
        .args(["generate-config", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("validation = \"strict\""));
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reduce"))
        .stdout(predicate::str::contains("generate-config"));
}
