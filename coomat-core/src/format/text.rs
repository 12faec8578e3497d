//! Parser and serializer for the coordinate-list text format
//!
//! The format is line oriented: two `key=value` header lines declaring
//! the shape, then one `(row,col,value)` triple per non-zero entry.
//! Blank lines between entries are skipped. Any malformed line aborts
//! the whole parse; partial or lenient parsing is not supported.

use alloc::string::String;
use core::fmt::Write;

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::matrix::CooMatrix;
use crate::validation::validate_shape;
use crate::{MatrixError, Result};

/// Parse a matrix from its text representation
///
/// Entries with a value of exactly zero are discarded. Coordinates
/// outside the declared shape fail with `OutOfBounds` rather than being
/// stored unchecked.
pub fn parse_matrix(input: &str) -> Result<CooMatrix> {
    let mut lines = input.lines();

    let nrows = parse_header_line(lines.next(), 1)?;
    let ncols = parse_header_line(lines.next(), 2)?;
    let (nrows, ncols) = validate_shape(nrows, ncols)?;

    let mut matrix = CooMatrix::new(nrows, ncols);
    for (offset, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry_line(line, offset + 3)?;
        if row < 0 || col < 0 {
            return Err(MatrixError::OutOfBounds);
        }
        matrix.set(row as usize, col as usize, value)?;
    }

    Ok(matrix)
}

/// Serialize a matrix to its text representation
///
/// Entries are written in the store's iteration order. Round-tripping
/// through [`parse_matrix`] reconstructs an equal matrix.
pub fn serialize_matrix(matrix: &CooMatrix) -> String {
    let mut out = String::new();

    // writes into a String are infallible
    let _ = writeln!(out, "{ROWS_KEY}={}", matrix.nrows());
    let _ = writeln!(out, "{COLS_KEY}={}", matrix.ncols());
    for (row, col, value) in matrix.iter() {
        let _ = writeln!(out, "({row},{col},{value})");
    }

    out
}

/// Parse one `key=value` header line into its integer value
///
/// The key itself is not validated; the line must contain exactly one
/// `=` and the value must parse as a signed integer.
fn parse_header_line(line: Option<&str>, number: usize) -> Result<i64> {
    let malformed = MatrixError::FormatError { line: number };
    let line = line.ok_or(malformed)?.trim();

    let mut fields = line.split('=');
    let _key = fields.next();
    let value = fields.next().ok_or(malformed)?;
    if fields.next().is_some() {
        return Err(malformed);
    }

    value.parse::<i64>().map_err(|_| malformed)
}

/// Parse one `(row,col,value)` entry line
fn parse_entry_line(line: &str, number: usize) -> Result<(i64, i64, f64)> {
    let malformed = MatrixError::FormatError { line: number };

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(malformed)?;

    let mut fields = inner.split(',');
    let row = fields.next().ok_or(malformed)?;
    let col = fields.next().ok_or(malformed)?;
    let value = fields.next().ok_or(malformed)?;
    if fields.next().is_some() {
        return Err(malformed);
    }

    let row = row.parse::<i64>().map_err(|_| malformed)?;
    let col = col.parse::<i64>().map_err(|_| malformed)?;
    let value = value.parse::<f64>().map_err(|_| malformed)?;

    Ok((row, col, value))
}
