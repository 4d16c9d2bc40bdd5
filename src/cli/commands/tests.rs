//! CLI command tests

use super::*;
use crate::config::parse_args;
use std::path::PathBuf;
use tempfile::TempDir;

const TEST_CSV: &str = "Molecule Name,LogD,KSOL\n\
mol-1,1.2,10\n\
mol-2,0.4,250\n\
mol-3,2.9,3\n\
mol-4,-0.5,80\n";

const PRED_CSV: &str = "Molecule Name,LogD,KSOL\n\
mol-4,-0.2,60\n\
mol-3,2.5,8\n\
mol-2,0.6,200\n\
mol-1,1.0,15\n";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> std::result::Result<(), String> {
    let mut argv = vec!["admet-eval", "-q"];
    argv.extend_from_slice(args);
    run_command(parse_args(argv).unwrap())
}

#[test]
fn test_evaluate_writes_csv_report() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let pred = write(&dir, "pred.csv", PRED_CSV);
    let out = dir.path().join("report.csv");

    run(&[
        "evaluate",
        pred.to_str().unwrap(),
        test.to_str().unwrap(),
        "--endpoint",
        "LogD",
        "--endpoint",
        "KSOL",
        "--samples",
        "50",
        "--format",
        "csv",
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let report = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("LogD,"));
    assert!(lines[2].starts_with("KSOL,"));
    assert!(lines[3].starts_with("Macro Average,"));
}

#[test]
fn test_evaluate_reports_missing_columns() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let pred = write(&dir, "pred.csv", PRED_CSV);

    // Default config asks for all nine endpoints.
    let err = run(&["evaluate", pred.to_str().unwrap(), test.to_str().unwrap()]).unwrap_err();
    assert!(err.starts_with("Results file is missing required columns"));
    assert!(err.contains("MLM CLint"));
}

#[test]
fn test_validate_reports_coverage_error() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let pred = write(&dir, "pred.csv", "Molecule Name,LogD,KSOL\nmol-1,1,1\n");
    let config = write(&dir, "eval.yaml", "endpoints: [LogD, KSOL]\n");

    let err = run(&[
        "validate",
        pred.to_str().unwrap(),
        test.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap_err();
    assert!(err.contains("missing some molecules"));
}

#[test]
fn test_validate_accepts_good_submission() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let pred = write(&dir, "pred.csv", PRED_CSV);
    let config = write(&dir, "eval.yaml", "endpoints: [LogD, KSOL]\n");

    run(&[
        "validate",
        pred.to_str().unwrap(),
        test.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
    ])
    .unwrap();
}

#[test]
fn test_invalid_override_is_config_error() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let pred = write(&dir, "pred.csv", PRED_CSV);

    let err = run(&[
        "evaluate",
        pred.to_str().unwrap(),
        test.to_str().unwrap(),
        "--samples",
        "0",
    ])
    .unwrap_err();
    assert!(err.contains("resample.n_samples"));
}

#[test]
fn test_missing_config_file() {
    let err = run(&["endpoints", "--config", "/no/such/eval.yaml"]).unwrap_err();
    assert!(err.starts_with("Configuration file not found"));
}

#[test]
fn test_endpoints_command() {
    run(&["endpoints"]).unwrap();
    run(&["endpoints", "--format", "json"]).unwrap();
}

#[test]
fn test_rank_command() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let a = write(&dir, "team-a.csv", PRED_CSV);
    let b = write(&dir, "team-b.csv", TEST_CSV);

    run(&[
        "rank",
        test.to_str().unwrap(),
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--endpoint",
        "KSOL",
        "--samples",
        "20",
        "--format",
        "markdown",
    ])
    .unwrap();
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let test = write(&dir, "test.csv", TEST_CSV);
    let err = run(&["evaluate", "/no/such/pred.csv", test.to_str().unwrap()]).unwrap_err();
    assert!(err.starts_with("IO error"));
}
