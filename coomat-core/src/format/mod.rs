//! Text interchange format for sparse coordinate matrices
//!
//! Pure parsing and serialization over in-memory strings. File access
//! and path handling live in the I/O crate.

pub mod constants;
pub mod text;

pub use constants::{COLS_KEY, ROWS_KEY};
pub use text::{parse_matrix, serialize_matrix};
