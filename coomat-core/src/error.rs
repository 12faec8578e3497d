//! Error types for sparse matrix operations

/// Errors that can occur while building, combining or parsing matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Negative dimension at construction
    InvalidDimension,
    /// Coordinate outside the declared shape
    OutOfBounds,
    /// Operand shapes incompatible for the requested operation
    DimensionMismatch,
    /// Malformed header or entry line during parsing
    FormatError {
        /// 1-based line number of the offending line
        line: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimension => write!(f, "Matrix dimensions must be non-negative"),
            MatrixError::OutOfBounds => write!(f, "Coordinate outside the declared matrix shape"),
            MatrixError::DimensionMismatch => {
                write!(f, "Operand shapes are incompatible for this operation")
            }
            MatrixError::FormatError { line } => {
                write!(f, "Malformed matrix text at line {line}")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
