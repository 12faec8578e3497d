//! Matrix access abstraction
//!
//! The minimal read interface shared by matrix representations,
//! regardless of where their data lives.

/// Read access to a sparse matrix
pub trait SparseMatrix {
    /// Get the stored element at a position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<f64>;

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of non-zero elements stored
    fn nnz(&self) -> usize;
}
