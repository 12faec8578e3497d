#![no_std]

//! Core sparse coordinate-matrix definitions
//!
//! This crate provides the in-memory sparse matrix model, its arithmetic
//! and the text interchange format. It performs no I/O and emits no
//! diagnostics; file handling and presentation live in the `coomat`
//! crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
#[cfg(feature = "alloc")]
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use format::{parse_matrix, serialize_matrix};
#[cfg(feature = "alloc")]
pub use matrix::CooMatrix;
pub use traits::*;
pub use validation::*;
