use std::io::{Cursor, Write};

use pagesim::MmuError;
use pagesim::sim::trace::{parse_trace, read_trace};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_parse_takes_first_column() {
    let input = "0041f7a0 R\n13f5e2c0 R\n05e78900 W\n";
    let addresses = parse_trace(Cursor::new(input)).unwrap();
    assert_eq!(addresses, vec!["0041f7a0", "13f5e2c0", "05e78900"]);
}

#[test]
fn test_parse_skips_blank_lines_and_trims() {
    let input = "\n  0x01000   W  \n\t\n0x02000\n";
    let addresses = parse_trace(Cursor::new(input)).unwrap();
    assert_eq!(addresses, vec!["0x01000", "0x02000"]);
}

#[test]
fn test_parse_empty() {
    assert!(parse_trace(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn test_read_trace_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0041f7a0 R").unwrap();
    writeln!(file, "0041f7a4 R").unwrap();

    let addresses = read_trace(file.path()).unwrap();
    assert_eq!(addresses, vec!["0041f7a0", "0041f7a4"]);
}

#[test]
fn test_read_missing_trace() {
    assert!(matches!(
        read_trace("/nonexistent/trace.txt"),
        Err(MmuError::Io(_))
    ));
}
