//! Routing trait, default Dijkstra implementation, and batch routing.
//!
//! # Pluggability
//!
//! Callers that route many requests go through the [`Router`] trait, so an
//! application can swap in another strategy (A*, a precomputed table, a
//! cached router) without touching call sites.  [`DijkstraRouter`] is the
//! default and delegates to [`find_path_indexed`].
//!
//! # Batches
//!
//! [`route_many`] indexes the ferry list once and answers every pair against
//! it.  Searches share nothing but read-only inputs, so with the `parallel`
//! feature they run on the Rayon pool; results always come back in input
//! order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tracing::debug;

use tp_core::{Coord, Ferry, Grid};

use crate::error::RouteResult;
use crate::index::FerryIndex;
use crate::route::Route;
use crate::search::{find_path_indexed, SearchConfig};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable route engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve searches
/// from several Rayon workers at once.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` over `grid` and the ferries in
    /// `index`.  An index built for another grid shape is an error
    /// ([`RouteError::IndexMismatch`](crate::RouteError::IndexMismatch)).
    fn route(&self, grid: &Grid, index: &FerryIndex, from: Coord, to: Coord) -> RouteResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra search with optional limits.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter {
    pub config: SearchConfig,
}

impl DijkstraRouter {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Router for DijkstraRouter {
    fn route(&self, grid: &Grid, index: &FerryIndex, from: Coord, to: Coord) -> RouteResult<Route> {
        find_path_indexed(grid, index, from, to, &self.config)
    }
}

// ── Batch routing ─────────────────────────────────────────────────────────────

/// Route every `(from, to)` pair independently.
///
/// The `i`-th result answers `pairs[i]`.  Each result is identical to what a
/// lone `router.route` call would return for that pair.
pub fn route_many<R: Router>(
    router: &R,
    grid: &Grid,
    ferries: &[Ferry],
    pairs: &[(Coord, Coord)],
) -> Vec<RouteResult<Route>> {
    let index = FerryIndex::build(grid, ferries);
    debug!(pairs = pairs.len(), ferries = index.len(), "routing batch");

    #[cfg(feature = "parallel")]
    let iter = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pairs.iter();

    iter.map(|&(from, to)| router.route(grid, &index, from, to)).collect()
}
