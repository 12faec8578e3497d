//! File persistence for text-format matrix files
//!
//! Owns path resolution, directory creation and buffered reads. Parsing
//! and serialization stay in the core crate; every failure here is
//! returned to the caller, including directory-creation failures.

use std::fs;
use std::path::{Path, PathBuf};

use coomat_core::format::{parse_matrix, serialize_matrix};
use coomat_core::matrix::CooMatrix;
use coomat_core::traits::SparseMatrix;

use crate::error::Result;

/// Suffix appended to an input file name when persisting its result
pub const RESULTS_SUFFIX: &str = "_results.txt";

/// Read and parse a matrix file
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let matrix = parse_matrix(&text)?;

    log::debug!(
        "loaded {}x{} matrix ({} entries) from {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        path.display()
    );

    Ok(matrix)
}

/// Serialize a matrix and write it to a file
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &CooMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize_matrix(matrix))?;

    log::debug!(
        "saved {}x{} matrix ({} entries) to {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        path.display()
    );

    Ok(())
}

/// One-line human-readable description of any matrix representation
pub fn summary<M: SparseMatrix>(matrix: &M) -> String {
    let (nrows, ncols) = matrix.dimensions();

    format!("{nrows}x{ncols} sparse matrix, {} non-zero entries", matrix.nnz())
}

/// Directory configuration for matrix file workflows
///
/// Resolves input files against a configured input directory and
/// persists results into a separate results directory, created on
/// demand. Both directories are explicit configuration; nothing is read
/// from ambient process state such as the working directory.
#[derive(Debug, Clone)]
pub struct MatrixDir {
    input_dir: PathBuf,
    results_dir: PathBuf,
}

impl MatrixDir {
    /// Create a configuration rooted at an input directory
    ///
    /// The results directory defaults to `results` inside the input
    /// directory.
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        let input_dir = input_dir.into();
        let results_dir = input_dir.join("results");

        Self {
            input_dir,
            results_dir,
        }
    }

    /// Override the results directory
    pub fn with_results_dir<P: Into<PathBuf>>(mut self, results_dir: P) -> Self {
        self.results_dir = results_dir.into();
        self
    }

    /// Configured input directory
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Configured results directory
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Load a matrix file from the input directory
    pub fn load(&self, name: &str) -> Result<CooMatrix> {
        load_matrix(self.input_dir.join(name))
    }

    /// Persist a result derived from the named input file
    ///
    /// Creates the results directory if needed, writes the matrix to
    /// `<name>_results.txt` inside it, and returns the written path.
    pub fn save_results(&self, name: &str, matrix: &CooMatrix) -> Result<PathBuf> {
        fs::create_dir_all(&self.results_dir)?;

        let path = self.results_dir.join(format!("{name}{RESULTS_SUFFIX}"));
        save_matrix(&path, matrix)?;

        Ok(path)
    }
}
