//! Bounds validation for matrix shapes and coordinates
//!
//! These functions are the single place where shape and coordinate
//! constraints are enforced; the store and the parser both route
//! through them.

use crate::MatrixError;

/// Validate a signed (rows, cols) pair read from an external source
///
/// Shapes are `usize` internally; this is the boundary where signed
/// input from parsing is checked and converted.
pub const fn validate_shape(nrows: i64, ncols: i64) -> Result<(usize, usize), MatrixError> {
    if nrows < 0 || ncols < 0 {
        return Err(MatrixError::InvalidDimension);
    }

    Ok((nrows as usize, ncols as usize))
}

/// Validate that a coordinate lies inside a matrix shape
pub const fn validate_coord(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), MatrixError> {
    if row >= nrows || col >= ncols {
        return Err(MatrixError::OutOfBounds);
    }

    Ok(())
}

/// Validate that two shapes are identical
///
/// Precondition for element-wise operations (addition, subtraction).
pub const fn validate_same_shape(
    a: (usize, usize),
    b: (usize, usize),
) -> Result<(), MatrixError> {
    if a.0 != b.0 || a.1 != b.1 {
        return Err(MatrixError::DimensionMismatch);
    }

    Ok(())
}

/// Validate the inner-dimension requirement for multiplication
///
/// The left operand's column count must equal the right operand's row
/// count.
pub const fn validate_inner_dim(a: (usize, usize), b: (usize, usize)) -> Result<(), MatrixError> {
    if a.1 != b.0 {
        return Err(MatrixError::DimensionMismatch);
    }

    Ok(())
}
