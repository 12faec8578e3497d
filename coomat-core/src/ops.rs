//! Arithmetic over sparse coordinate matrices
//!
//! All operations are pure: operands are borrowed immutably and every
//! result is returned as a fresh matrix. Values that accumulate to an
//! exact zero are dropped from the result.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::matrix::CooMatrix;
use crate::validation::{validate_inner_dim, validate_same_shape};
use crate::Result;

/// Element-wise sum of two equally shaped matrices
pub fn add(lhs: &CooMatrix, rhs: &CooMatrix) -> Result<CooMatrix> {
    validate_same_shape(lhs.shape(), rhs.shape())?;

    let mut acc: HashMap<(usize, usize), f64> = HashMap::with_capacity(lhs.nnz() + rhs.nnz());
    for (row, col, value) in lhs.iter() {
        acc.insert((row, col), value);
    }
    for (row, col, value) in rhs.iter() {
        *acc.entry((row, col)).or_insert(0.0) += value;
    }

    collect_nonzero(lhs.nrows(), lhs.ncols(), acc)
}

/// Element-wise difference of two equally shaped matrices
pub fn sub(lhs: &CooMatrix, rhs: &CooMatrix) -> Result<CooMatrix> {
    validate_same_shape(lhs.shape(), rhs.shape())?;

    let mut acc: HashMap<(usize, usize), f64> = HashMap::with_capacity(lhs.nnz() + rhs.nnz());
    for (row, col, value) in lhs.iter() {
        acc.insert((row, col), value);
    }
    for (row, col, value) in rhs.iter() {
        *acc.entry((row, col)).or_insert(0.0) -= value;
    }

    collect_nonzero(lhs.nrows(), lhs.ncols(), acc)
}

/// Matrix product using an indexed join over the shared dimension
///
/// The operand with fewer stored entries is grouped by its join key
/// (the right operand by row, or the left by column), so each entry of
/// the other operand meets only its matching partners through an O(1)
/// lookup instead of a scan over the full cross product of both entry
/// sets. Total cost is on the order of nnz(lhs) + nnz(rhs) plus the
/// number of accumulated products.
pub fn mul(lhs: &CooMatrix, rhs: &CooMatrix) -> Result<CooMatrix> {
    validate_inner_dim(lhs.shape(), rhs.shape())?;

    let mut acc: HashMap<(usize, usize), f64> = HashMap::new();

    if rhs.nnz() <= lhs.nnz() {
        // group rhs by row, stream lhs
        let mut by_row: HashMap<usize, Vec<(usize, f64)>> = HashMap::new();
        for (k, col, value) in rhs.iter() {
            by_row.entry(k).or_default().push((col, value));
        }

        for (row, k, left) in lhs.iter() {
            if let Some(group) = by_row.get(&k) {
                for &(col, right) in group {
                    *acc.entry((row, col)).or_insert(0.0) += left * right;
                }
            }
        }
    } else {
        // group lhs by column, stream rhs
        let mut by_col: HashMap<usize, Vec<(usize, f64)>> = HashMap::new();
        for (row, k, value) in lhs.iter() {
            by_col.entry(k).or_default().push((row, value));
        }

        for (k, col, right) in rhs.iter() {
            if let Some(group) = by_col.get(&k) {
                for &(row, left) in group {
                    *acc.entry((row, col)).or_insert(0.0) += left * right;
                }
            }
        }
    }

    collect_nonzero(lhs.nrows(), rhs.ncols(), acc)
}

/// Compact an accumulator into a matrix, dropping exact-zero sums
fn collect_nonzero(
    nrows: usize,
    ncols: usize,
    acc: HashMap<(usize, usize), f64>,
) -> Result<CooMatrix> {
    CooMatrix::from_entries(
        nrows,
        ncols,
        acc.into_iter().map(|((row, col), value)| (row, col, value)),
    )
}
