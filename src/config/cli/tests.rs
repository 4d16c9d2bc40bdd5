//! Tests for CLI argument parsing

use super::*;
use crate::eval::EvalConfig;
use admet_eval_common::OutputFormat;
use std::path::PathBuf;

#[test]
fn test_parse_evaluate_command() {
    let cli = parse_args(["admet-eval", "evaluate", "pred.csv", "test.csv"]).unwrap();
    match cli.command {
        Command::Evaluate(args) => {
            assert_eq!(args.predictions, PathBuf::from("pred.csv"));
            assert_eq!(args.test, PathBuf::from("test.csv"));
            assert_eq!(args.config, None);
            assert_eq!(args.format, OutputFormat::Table);
            assert_eq!(args.resample, ResampleArgs::default());
            assert_eq!(args.output, None);
        }
        _ => panic!("Expected Evaluate command"),
    }
}

#[test]
fn test_parse_evaluate_with_overrides() {
    let cli = parse_args([
        "admet-eval",
        "evaluate",
        "pred.csv",
        "test.csv",
        "--config",
        "eval.yaml",
        "--seed",
        "7",
        "--samples",
        "250",
        "--endpoint",
        "LogD",
        "--endpoint",
        "KSOL",
        "--format",
        "json",
        "--output",
        "report.json",
    ])
    .unwrap();

    match cli.command {
        Command::Evaluate(args) => {
            assert_eq!(args.config, Some(PathBuf::from("eval.yaml")));
            assert_eq!(args.resample.seed, Some(7));
            assert_eq!(args.resample.samples, Some(250));
            assert_eq!(args.resample.endpoints, vec!["LogD", "KSOL"]);
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.output, Some(PathBuf::from("report.json")));
        }
        _ => panic!("Expected Evaluate command"),
    }
}

#[test]
fn test_parse_validate_command() {
    let cli = parse_args(["admet-eval", "validate", "pred.csv", "test.csv"]).unwrap();
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.predictions, PathBuf::from("pred.csv"));
            assert_eq!(args.config, None);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_parse_endpoints_command() {
    let cli = parse_args(["admet-eval", "endpoints", "--format", "json"]).unwrap();
    match cli.command {
        Command::Endpoints(args) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("Expected Endpoints command"),
    }
}

#[test]
fn test_parse_rank_command() {
    let cli = parse_args(["admet-eval", "rank", "test.csv", "a.csv", "b.csv", "-f", "md"]).unwrap();
    match cli.command {
        Command::Rank(args) => {
            assert_eq!(args.test, PathBuf::from("test.csv"));
            assert_eq!(args.submissions.len(), 2);
            assert_eq!(args.format, OutputFormat::Markdown);
        }
        _ => panic!("Expected Rank command"),
    }
}

#[test]
fn test_rank_requires_a_submission() {
    assert!(parse_args(["admet-eval", "rank", "test.csv"]).is_err());
}

#[test]
fn test_missing_test_file() {
    assert!(parse_args(["admet-eval", "evaluate", "pred.csv"]).is_err());
}

#[test]
fn test_unknown_command() {
    assert!(parse_args(["admet-eval", "unknown"]).is_err());
}

#[test]
fn test_unknown_format() {
    assert!(parse_args(["admet-eval", "evaluate", "p.csv", "t.csv", "--format", "xml"]).is_err());
}

#[test]
fn test_verbose_and_quiet_flags() {
    let cli = parse_args(["admet-eval", "--verbose", "endpoints"]).unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = parse_args(["admet-eval", "endpoints", "-q"]).unwrap();
    assert!(!cli.verbose);
    assert!(cli.quiet);
}

#[test]
fn test_apply_overrides_none() {
    let mut config = EvalConfig::default();
    apply_overrides(&mut config, &ResampleArgs::default());
    assert_eq!(config, EvalConfig::default());
}

#[test]
fn test_apply_overrides_all() {
    let mut config = EvalConfig::default();
    let args = ResampleArgs {
        seed: Some(42),
        samples: Some(10),
        endpoints: vec!["MPPB".to_string()],
    };
    apply_overrides(&mut config, &args);
    assert_eq!(config.resample.seed, 42);
    assert_eq!(config.resample.n_samples, 10);
    assert_eq!(config.endpoints, vec!["MPPB"]);
}
