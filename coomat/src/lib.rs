//! Sparse coordinate-matrix arithmetic with file-backed text I/O
//!
//! Matrices are stored non-zero-only, read and written in a plain-text
//! coordinate-list format, and combined with shape-checked addition,
//! subtraction and an indexed-join multiplication.
//!
//! ## Architecture
//!
//! The workspace follows a clean model/implementation separation:
//!
//! - **coomat-core**: pure matrix model, arithmetic, validation and text
//!   format (no I/O)
//! - **coomat**: file persistence, memory-mapped reads and diagnostics
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use coomat::{load_matrix, ops, save_matrix};
//!
//! fn example() -> coomat::Result<()> {
//!     let a = load_matrix("a.txt")?;
//!     let b = load_matrix("b.txt")?;
//!
//!     let product = ops::mul(&a, &b)?;
//!     save_matrix("product.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export the core model and format definitions
pub use coomat_core::{
    // Matrix model and arithmetic
    matrix::CooMatrix,
    ops,
    // Text format
    format::{parse_matrix, serialize_matrix},
    // Core error type
    error::MatrixError,
    // Access trait and validation utilities
    traits::SparseMatrix,
    validation,
};

// Implementation modules
pub mod error;
pub mod file_backend;
#[cfg(feature = "mmap")]
pub mod mmap_backend;

// Public exports
pub use error::{Error, Result};
pub use file_backend::{load_matrix, save_matrix, summary, MatrixDir};

// Memory mapping features
#[cfg(feature = "mmap")]
pub use mmap_backend::MmapSource;
