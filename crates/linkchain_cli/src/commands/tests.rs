#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use linkchain_core::{Axis, Violation};
use pretty_assertions::assert_eq;

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

fn parse(raw: &[&str]) -> Result<Option<Command>, CliError> {
    Command::parse(&args(raw))
}

// === Parsing ===

#[test]
fn test_parse_no_command() {
    assert_eq!(parse(&[]).unwrap(), None);
}

#[test]
fn test_parse_grid() {
    assert_eq!(
        parse(&["grid", "3", "2", "0"]).unwrap(),
        Some(Command::Grid {
            rows: 3,
            cols: 2,
            pad: 0
        })
    );
}

#[test]
fn test_parse_grow_jagged_anywhere() {
    assert_eq!(
        parse(&["grow", "--jagged", "3", "2", "1", "9", "-1"]).unwrap(),
        Some(Command::Grow {
            rows: 3,
            cols: 2,
            row: 1,
            value: 9,
            pad: -1,
            keep_dims: false,
        })
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse(&["shuffle"]),
        Err(CliError::UnknownCommand(name)) if name == "shuffle"
    ));
    assert!(matches!(
        parse(&["grid", "3"]),
        Err(CliError::MissingArgument { command: "grid", name: "cols" })
    ));
    assert!(matches!(
        parse(&["grid", "-3", "2", "0"]),
        Err(CliError::InvalidNumber { name: "rows", .. })
    ));
    assert!(matches!(
        parse(&["demo", "now"]),
        Err(CliError::UnexpectedArgument(extra)) if extra == "now"
    ));
    assert!(matches!(
        parse(&["list", "1", "x"]),
        Err(CliError::InvalidNumber { name: "v", .. })
    ));
}

// === Execution ===

#[test]
fn test_run_demo() {
    assert_eq!(run(&Command::Demo).unwrap(), "1\n100\n1 5 10 100\n");
}

#[test]
fn test_run_list() {
    assert_eq!(run(&Command::List(vec![1, 2, 3])).unwrap(), "1 2 3\n");
    assert_eq!(run(&Command::List(Vec::new())).unwrap(), "\n");
}

#[test]
fn test_run_grid() {
    let out = run(&Command::Grid {
        rows: 2,
        cols: 3,
        pad: 7,
    })
    .unwrap();
    assert_eq!(out, "7 7 7\n7 7 7\n");
}

#[test]
fn test_run_grow_keep_dims() {
    let out = run(&Command::Grow {
        rows: 3,
        cols: 2,
        row: 1,
        value: 9,
        pad: -1,
        keep_dims: true,
    })
    .unwrap();
    assert_eq!(out, "-1 -1 -1\n-1 -1 9\n-1 -1 -1\n");
}

#[test]
fn test_run_grow_reports_bad_row() {
    let err = run(&Command::Grow {
        rows: 2,
        cols: 2,
        row: 5,
        value: 1,
        pad: 0,
        keep_dims: false,
    })
    .unwrap_err();
    assert!(matches!(
        err,
        CliError::Chain(ChainError::IndexOutOfBounds {
            axis: Axis::Row,
            index: 5,
            len: 2
        })
    ));
    assert_eq!(err.to_string(), "row index 5 is out of bounds (length 2)");
}

#[test]
fn test_chain_error_is_transparent() {
    let err = CliError::from(ChainError::from(Violation::NotRowMajor));
    assert_eq!(
        err.to_string(),
        "invariant violation: operation requires a row-major chain"
    );
}

#[test]
fn test_usage_lists_commands() {
    let text = usage();
    for command in ["demo", "list", "grid", "grow"] {
        assert!(text.contains(command), "usage is missing `{command}`");
    }
}
