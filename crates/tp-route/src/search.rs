//! Dijkstra search over the implicit grid graph plus ferries.
//!
//! # Graph
//!
//! Nodes are grid cells.  Each settled cell is expanded along two kinds of
//! edge:
//!
//! - **Grid moves** to the eight surrounding cells, in the fixed order
//!   E, W, S, N, SE, NW, NE, SW.  A move costs the destination cell's terrain
//!   cost; diagonals carry no surcharge and may cut corners.  Out-of-bounds
//!   and impassable neighbours are skipped.
//! - **Ferries** leaving the cell, in caller order.  A hop costs the ferry's
//!   declared cost instead of any terrain cost; the destination's terrain is
//!   never consulted, so a ferry may land on a void cell.
//!
//! # Frontier
//!
//! A binary min-heap keyed on `(cost, sequence)`.  The sequence number is the
//! insertion counter, so equal-cost entries pop in discovery order and
//! results are reproducible.  Improved costs are pushed as new entries; the
//! superseded ones stay in the heap and are discarded as stale when popped.
//!
//! Relaxation uses strict `<`: the first predecessor discovered at the
//! minimum cost is kept.  Costs are exact: an edge whose total would exceed
//! [`Cost::MAX`] is not relaxed, and if the end is reachable only through
//! such edges the search reports [`RouteError::CostOverflow`] rather than
//! [`RouteError::NoPathFound`].  Grid moves from a cell are relaxed before its
//! ferries, so on a tie the grid move wins.  This tie-break is an artefact of
//! expansion order, not a preference between land and ferry travel.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use tp_core::{Coord, Cost, Ferry, Grid, TileCost};

use crate::error::{Endpoint, RouteError, RouteResult};
use crate::index::FerryIndex;
use crate::route::{Leg, Route, Via};

/// Neighbour offsets `(dx, dy)`: orthogonal first, then diagonal.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (-1, -1), (1, -1), (-1, 1),
];

// ── Configuration ─────────────────────────────────────────────────────────────

/// Optional limits layered on top of the base search.
///
/// The default imposes no limits and gives exactly the behaviour of
/// [`find_path`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Fail with [`RouteError::BudgetExhausted`] once more than this many
    /// cells have been settled without reaching the end.
    pub max_expanded: Option<usize>,
}

impl SearchConfig {
    pub fn with_max_expanded(mut self, limit: usize) -> Self {
        self.max_expanded = Some(limit);
        self
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Minimum-cost route from `start` to `end`.
///
/// Validation runs first, in this order, reporting the first failure:
/// empty grid, start out of bounds, end out of bounds, start impassable, end
/// impassable.  `start == end` then yields a zero-cost single-cell route.
pub fn find_path(grid: &Grid, ferries: &[Ferry], start: Coord, end: Coord) -> RouteResult<Route> {
    find_path_with(grid, ferries, start, end, &SearchConfig::default())
}

/// [`find_path`] with explicit search limits.
pub fn find_path_with(
    grid: &Grid,
    ferries: &[Ferry],
    start: Coord,
    end: Coord,
    config: &SearchConfig,
) -> RouteResult<Route> {
    let (s, e) = validate(grid, start, end)?;
    if s == e {
        return Ok(Route::trivial(start));
    }
    let index = FerryIndex::build(grid, ferries);
    dijkstra(grid, &index, s, e, config)
}

/// Like [`find_path_with`] but against a prebuilt [`FerryIndex`], so many
/// searches over the same grid share one index.
///
/// An index built for a grid of another shape is rejected with
/// [`RouteError::IndexMismatch`] before any other check.
pub fn find_path_indexed(
    grid: &Grid,
    index: &FerryIndex,
    start: Coord,
    end: Coord,
    config: &SearchConfig,
) -> RouteResult<Route> {
    if !index.fits(grid) {
        let (index_cols, index_rows) = index.shape();
        return Err(RouteError::IndexMismatch {
            index_cols,
            index_rows,
            cols: grid.cols(),
            rows: grid.rows(),
        });
    }
    let (s, e) = validate(grid, start, end)?;
    if s == e {
        return Ok(Route::trivial(start));
    }
    dijkstra(grid, index, s, e, config)
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate(grid: &Grid, start: Coord, end: Coord) -> RouteResult<(usize, usize)> {
    if grid.is_empty() {
        return Err(RouteError::EmptyGrid);
    }

    let locate = |endpoint: Endpoint, coord: Coord| {
        grid.index(coord).ok_or(RouteError::OutOfBounds {
            endpoint,
            coord,
            cols: grid.cols(),
            rows: grid.rows(),
        })
    };
    let s = locate(Endpoint::Start, start)?;
    let e = locate(Endpoint::End, end)?;

    if !grid.cost_at(s).is_passable() {
        return Err(RouteError::ImpassableEndpoint { endpoint: Endpoint::Start, coord: start });
    }
    if !grid.cost_at(e).is_passable() {
        return Err(RouteError::ImpassableEndpoint { endpoint: Endpoint::End, coord: end });
    }
    Ok((s, e))
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// How a cell was last improved.
#[derive(Copy, Clone)]
struct Pred {
    from: usize,
    cost: Cost,
    via:  Via,
}

/// Per-call scratch state.  Never shared between searches.
struct Scratch {
    /// best[c] = lowest known cost to reach c; `None` until c is discovered.
    best: Vec<Option<Cost>>,
    pred: Vec<Option<Pred>>,
    // Min-heap via Reverse: (cost, sequence, cell).
    heap: BinaryHeap<Reverse<(Cost, u64, usize)>>,
    seq:  u64,
    /// Cells reached by an edge whose total cost overflowed.
    overflowed: Vec<usize>,
}

impl Scratch {
    fn new(cells: usize, start: usize) -> Self {
        let mut best = vec![None; cells];
        best[start] = Some(0);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, 0, start)));
        Self { best, pred: vec![None; cells], heap, seq: 0, overflowed: Vec::new() }
    }

    #[inline]
    fn relax(&mut self, from: usize, to: usize, base: Cost, step: Cost, via: Via) {
        let Some(candidate) = base.checked_add(step) else {
            self.overflowed.push(to);
            return;
        };
        if self.best[to].is_none_or(|best| candidate < best) {
            self.best[to] = Some(candidate);
            self.pred[to] = Some(Pred { from, cost: step, via });
            self.seq += 1;
            self.heap.push(Reverse((candidate, self.seq, to)));
        }
    }
}

fn dijkstra(
    grid: &Grid,
    index: &FerryIndex,
    start: usize,
    end: usize,
    config: &SearchConfig,
) -> RouteResult<Route> {
    let mut scratch = Scratch::new(grid.len(), start);
    let mut expanded = 0usize;

    while let Some(Reverse((cost, _, cell))) = scratch.heap.pop() {
        // Skip stale heap entries.
        if scratch.best[cell].is_some_and(|best| cost > best) {
            trace!(cell, cost, "stale frontier entry");
            continue;
        }

        if cell == end {
            let route = reconstruct(grid, &scratch.pred, start, end, cost, expanded);
            debug!(
                from = %route.start(),
                to = %route.end(),
                cost,
                expanded,
                ferry_hops = route.ferry_hops(),
                "route found"
            );
            return Ok(route);
        }

        expanded += 1;
        if let Some(limit) = config.max_expanded {
            if expanded > limit {
                debug!(limit, "search budget exhausted");
                return Err(RouteError::BudgetExhausted { limit });
            }
        }

        let here = grid.coord(cell);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let Some(next) = grid.index(here.offset(dx, dy)) else {
                continue;
            };
            let TileCost::Passable(step) = grid.cost_at(next) else {
                continue;
            };
            scratch.relax(cell, next, cost, step, Via::Step);
        }

        for t in index.out_ferries(cell) {
            scratch.relax(cell, t.dest, cost, t.cost, Via::Ferry(t.ferry));
        }
    }

    let (from, to) = (grid.coord(start), grid.coord(end));
    if reaches(grid, index, &scratch.overflowed, end) {
        debug!(%from, %to, expanded, "end reachable only beyond the cost range");
        return Err(RouteError::CostOverflow { from, to });
    }
    debug!(%from, %to, expanded, "frontier exhausted");
    Err(RouteError::NoPathFound { from, to })
}

/// Whether `end` can be reached from any of `seeds`, ignoring cost.
fn reaches(grid: &Grid, index: &FerryIndex, seeds: &[usize], end: usize) -> bool {
    if seeds.is_empty() {
        return false;
    }
    let mut seen = vec![false; grid.len()];
    let mut stack = Vec::with_capacity(seeds.len());
    for &s in seeds {
        if !seen[s] {
            seen[s] = true;
            stack.push(s);
        }
    }

    while let Some(cell) = stack.pop() {
        if cell == end {
            return true;
        }
        let here = grid.coord(cell);
        let steps = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| grid.index(here.offset(dx, dy)))
            .filter(|&next| grid.cost_at(next).is_passable());
        let hops = index.out_ferries(cell).iter().map(|t| t.dest);
        for next in steps.chain(hops) {
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    false
}

fn reconstruct(
    grid: &Grid,
    pred: &[Option<Pred>],
    start: usize,
    end: usize,
    total: Cost,
    expanded: usize,
) -> Route {
    let mut legs = Vec::new();
    let mut cur = end;
    while let Some(p) = pred[cur] {
        legs.push(Leg { from: grid.coord(p.from), to: grid.coord(cur), cost: p.cost, via: p.via });
        cur = p.from;
    }
    debug_assert_eq!(cur, start);
    legs.reverse();

    let mut path = Vec::with_capacity(legs.len() + 1);
    path.push(grid.coord(start));
    path.extend(legs.iter().map(|l| l.to));

    Route { cost: total, path, legs, expanded }
}
