//! Error type for file-backed matrix operations

use coomat_core::MatrixError;

/// Errors from loading, saving or combining matrices through the I/O layer
///
/// Core model and format failures pass through unchanged; file system
/// failures are carried opaquely. Nothing in this crate terminates the
/// process on error or logs an error on the caller's behalf.
#[derive(Debug)]
pub enum Error {
    /// Core model or format failure
    Matrix(MatrixError),
    /// Underlying file system failure
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Matrix(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "I/O failure: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Matrix(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<MatrixError> for Error {
    fn from(err: MatrixError) -> Self {
        Error::Matrix(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type for file-backed matrix operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_passes_through() {
        let err = Error::from(MatrixError::DimensionMismatch);

        assert!(matches!(err, Error::Matrix(MatrixError::DimensionMismatch)));
    }

    #[test]
    fn test_io_error_is_opaque() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));

        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("I/O failure"));
    }
}
