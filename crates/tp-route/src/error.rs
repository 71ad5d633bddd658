//! Routing error type.

use std::fmt;

use thiserror::Error;

use tp_core::Coord;

/// Which end of a search request an error refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End   => "end",
        })
    }
}

/// Errors produced by `tp-route`.
///
/// All variants are returned, never panicked, for any grid/ferry input the
/// core types can represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("grid is empty")]
    EmptyGrid,

    #[error("{endpoint} {coord} is outside the {cols}x{rows} grid")]
    OutOfBounds { endpoint: Endpoint, coord: Coord, cols: usize, rows: usize },

    #[error("{endpoint} tile {coord} is impassable")]
    ImpassableEndpoint { endpoint: Endpoint, coord: Coord },

    #[error("no path from {from} to {to}")]
    NoPathFound { from: Coord, to: Coord },

    #[error("search budget of {limit} expanded cells exhausted")]
    BudgetExhausted { limit: usize },

    /// `to` is reachable from `from`, but only at a total cost that does not
    /// fit in [`Cost`](tp_core::Cost).
    #[error("every route from {from} to {to} overflows the cost range")]
    CostOverflow { from: Coord, to: Coord },

    #[error(
        "ferry index was built for a {index_cols}x{index_rows} grid, \
         searched grid is {cols}x{rows}"
    )]
    IndexMismatch { index_cols: usize, index_rows: usize, cols: usize, rows: usize },
}

impl RouteError {
    /// `true` for errors caused by an invalid request (bad grid, endpoints
    /// or index), `false` for outcomes of a valid search.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            RouteError::EmptyGrid
                | RouteError::OutOfBounds { .. }
                | RouteError::ImpassableEndpoint { .. }
                | RouteError::IndexMismatch { .. }
        )
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
