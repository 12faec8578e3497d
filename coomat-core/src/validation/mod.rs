//! Shape and coordinate validation
//!
//! Pure mathematical validation functions with no I/O dependencies.

pub mod bounds;

pub use bounds::*;
