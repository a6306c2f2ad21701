//! File parsing functionality for benchmark results
//!
//! This module handles loading and parsing the `output.csv` file written by the
//! MST benchmark runner.

use crate::common::ResultRow;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error(
        "{} not found! Please run the benchmark runner first to generate results.",
        .0.display()
    )]
    MissingInput(PathBuf),

    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Malformed benchmark data: {0}")]
    Malformed(#[from] csv::Error),

    #[error(
        "Malformed benchmark data: {column} is {value} on line {line}, which cannot be plotted"
    )]
    OutOfRange {
        line: u64,
        column: &'static str,
        value: f64,
    },

    #[error("Malformed benchmark data: header found but no benchmark rows")]
    Empty,
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the benchmark results file and load all rows for charting
///
/// Rows are returned in file order. Columns are matched by header name, so extra
/// columns (such as `Graph_ID`) and differing column order are accepted.
///
/// # Arguments
/// * `file_path` - Path to the `output.csv` file
///
/// # Returns
/// * `Ok(Vec<ResultRow>)` - Successfully parsed rows, at least one
/// * `Err(ParsingError)` - If the file is missing, unreadable, malformed, or holds a
///   non-finite or negative time (or a non-finite cost)
pub fn parse_results(file_path: &Path) -> Result<Vec<ResultRow>> {
    let file = File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ParsingError::MissingInput(file_path.to_path_buf()),
        _ => ParsingError::FileRead(e),
    })?;

    let rows = parse_results_from_reader(file)?;
    log::debug!("Parsed {} rows from {}", rows.len(), file_path.display());
    Ok(rows)
}

/// Parse benchmark rows from any CSV source with a header line
pub fn parse_results_from_reader<R: Read>(source: R) -> Result<Vec<ResultRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: ResultRow = record.deserialize(Some(&headers))?;

        if let Some((column, value)) = row.out_of_range_value() {
            return Err(ParsingError::OutOfRange {
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                column,
                value,
            });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParsingError::Empty);
    }

    Ok(rows)
}
