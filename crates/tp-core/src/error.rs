//! Core error types.
//!
//! Sub-crates define their own error enums and wrap `GridError` as one
//! variant where grids are constructed on their behalf (e.g. the loader).

use thiserror::Error;

/// Errors raised while constructing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row `row` does not have the width established by the first row.
    #[error("malformed grid: row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    /// `rows × cols` does not fit in the address space or in `i32` coordinates.
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
}

/// A string could not be parsed as an `x,y` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate {0:?}: expected \"x,y\"")]
pub struct CoordParseError(pub String);

pub type GridResult<T> = Result<T, GridError>;
