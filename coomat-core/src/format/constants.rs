//! Constants for the coordinate-list text format

/// Header key emitted for the row count
pub const ROWS_KEY: &str = "numrows";

/// Header key emitted for the column count
pub const COLS_KEY: &str = "numcols";
