//! Coordinate-keyed sparse matrix storage
//!
//! The store keeps only non-zero values, in a map keyed by `(row, col)`.
//! Lookups, insertions and removals are O(1) on average; memory scales
//! with the number of non-zero entries rather than the matrix area.

use hashbrown::HashMap;

use crate::traits::SparseMatrix;
use crate::validation::validate_coord;
use crate::Result;

/// Sparse matrix in coordinate form
///
/// The shape is fixed at construction. Writing an exact zero removes the
/// entry at that coordinate, so a stored value is never `0.0`. Arithmetic
/// over matrices never mutates its operands; see [`crate::ops`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CooMatrix {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), f64>,
}

impl CooMatrix {
    /// Create an empty matrix with the given shape
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Every coordinate is bounds-checked. Zero values are discarded and
    /// a duplicated coordinate keeps the last value seen.
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (row, col, value) in entries {
            matrix.set(row, col, value)?;
        }

        Ok(matrix)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of non-zero entries stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix has no non-zero entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at a coordinate, `0.0` when no entry is stored there
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        validate_coord(row, col, self.nrows, self.ncols)?;

        Ok(self.entries.get(&(row, col)).copied().unwrap_or(0.0))
    }

    /// Store a value at a coordinate
    ///
    /// An exact zero removes any existing entry; anything else inserts or
    /// overwrites.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        validate_coord(row, col, self.nrows, self.ncols)?;

        if value == 0.0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }

        Ok(())
    }

    /// Iterate over the stored `(row, col, value)` triples
    ///
    /// The order is unspecified but stable as long as the matrix is not
    /// mutated between iterations.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Fraction of cells holding a non-zero value
    pub fn density(&self) -> f64 {
        if self.nrows == 0 || self.ncols == 0 {
            return 0.0;
        }

        self.nnz() as f64 / (self.nrows as f64 * self.ncols as f64)
    }
}

impl SparseMatrix for CooMatrix {
    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::vec::Vec;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::CooMatrix;

    /// Interchange shape: explicit triples survive formats that cannot
    /// encode tuple map keys (JSON in particular).
    #[derive(Serialize, Deserialize)]
    struct Triplets {
        nrows: usize,
        ncols: usize,
        entries: Vec<(usize, usize, f64)>,
    }

    impl Serialize for CooMatrix {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut entries: Vec<_> = self.iter().collect();
            entries.sort_unstable_by_key(|&(row, col, _)| (row, col));

            Triplets {
                nrows: self.nrows,
                ncols: self.ncols,
                entries,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for CooMatrix {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = Triplets::deserialize(deserializer)?;

            CooMatrix::from_entries(raw.nrows, raw.ncols, raw.entries)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_new_is_empty() {
        let matrix = CooMatrix::new(3, 4);

        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.get(2, 3), Ok(0.0));
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = CooMatrix::new(2, 2);

        matrix.set(0, 1, 2.5).unwrap();
        matrix.set(1, 0, -3.0).unwrap();

        assert_eq!(matrix.get(0, 1), Ok(2.5));
        assert_eq!(matrix.get(1, 0), Ok(-3.0));
        assert_eq!(matrix.get(0, 0), Ok(0.0));
        assert_eq!(matrix.nnz(), 2);

        // overwrite
        matrix.set(0, 1, 4.0).unwrap();
        assert_eq!(matrix.get(0, 1), Ok(4.0));
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = CooMatrix::new(2, 2);

        matrix.set(0, 0, 1.0).unwrap();
        assert_eq!(matrix.nnz(), 1);

        matrix.set(0, 0, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(0, 0), Ok(0.0));

        // removing an absent entry is a no-op
        matrix.set(1, 1, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut matrix = CooMatrix::new(2, 2);

        assert_eq!(matrix.set(2, 0, 1.0), Err(MatrixError::OutOfBounds));
        assert_eq!(matrix.get(0, 2), Err(MatrixError::OutOfBounds));
        assert_eq!(matrix.set(0, 0, 1.0), Ok(()));
    }

    #[test]
    fn test_from_entries() {
        let matrix =
            CooMatrix::from_entries(2, 3, [(0, 0, 1.0), (1, 2, 2.0), (0, 1, 0.0)]).unwrap();

        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(0, 0), Ok(1.0));
        assert_eq!(matrix.get(1, 2), Ok(2.0));
        // zero entries are never stored
        assert_eq!(matrix.get(0, 1), Ok(0.0));
    }

    #[test]
    fn test_from_entries_last_write_wins() {
        let matrix = CooMatrix::from_entries(1, 1, [(0, 0, 1.0), (0, 0, 5.0)]).unwrap();

        assert_eq!(matrix.get(0, 0), Ok(5.0));
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_from_entries_rejects_out_of_bounds() {
        let result = CooMatrix::from_entries(2, 2, [(0, 0, 1.0), (5, 0, 2.0)]);

        assert_eq!(result, Err(MatrixError::OutOfBounds));
    }

    #[test]
    fn test_iter_yields_stored_triples() {
        let matrix = CooMatrix::from_entries(2, 2, [(0, 0, 1.0), (1, 1, 2.0)]).unwrap();

        let mut triples: alloc::vec::Vec<_> = matrix.iter().collect();
        triples.sort_unstable_by_key(|&(row, col, _)| (row, col));

        assert_eq!(triples, [(0, 0, 1.0), (1, 1, 2.0)]);
    }

    #[test]
    fn test_iter_order_is_stable() {
        let matrix = CooMatrix::from_entries(
            4,
            4,
            [(0, 0, 1.0), (1, 2, 2.0), (3, 3, 3.0), (2, 1, 4.0)],
        )
        .unwrap();

        let first: alloc::vec::Vec<_> = matrix.iter().collect();
        let second: alloc::vec::Vec<_> = matrix.iter().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = CooMatrix::from_entries(2, 2, [(0, 0, 1.0), (1, 1, 2.0)]).unwrap();
        let b = CooMatrix::from_entries(2, 2, [(1, 1, 2.0), (0, 0, 1.0)]).unwrap();

        assert_eq!(a, b);

        let c = CooMatrix::from_entries(2, 2, [(0, 0, 1.0)]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_density() {
        let matrix = CooMatrix::from_entries(2, 2, [(0, 0, 1.0)]).unwrap();
        assert_eq!(matrix.density(), 0.25);

        assert_eq!(CooMatrix::new(0, 5).density(), 0.0);
    }

    #[test]
    fn test_sparse_matrix_trait() {
        let matrix = CooMatrix::from_entries(2, 2, [(0, 1, 7.0)]).unwrap();
        let view: &dyn SparseMatrix = &matrix;

        assert_eq!(view.get_element(0, 1), Some(7.0));
        assert_eq!(view.get_element(0, 0), None);
        assert_eq!(view.get_element(9, 9), None);
        assert_eq!(view.dimensions(), (2, 2));
        assert_eq!(view.nnz(), 1);
    }
}
