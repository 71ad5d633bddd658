//! Search result types.

use tp_core::{Coord, Cost, Ferry, Grid, TileCost};

/// How a leg of a route was travelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Via {
    /// One of the eight neighbour moves; costs the destination cell's terrain.
    Step,
    /// The ferry at this position in the caller's list; costs the ferry's
    /// declared cost.
    Ferry(usize),
}

/// One transition between consecutive cells of a route.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from: Coord,
    pub to:   Coord,
    pub cost: Cost,
    pub via:  Via,
}

/// A cost-optimal route from start to end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Total accumulated cost; the sum of `legs[..].cost`.
    pub cost:     Cost,
    /// Cells from start to end inclusive.
    pub path:     Vec<Coord>,
    /// `path.len() - 1` transitions.
    pub legs:     Vec<Leg>,
    /// Cells settled before the end cell was reached.
    pub expanded: usize,
}

impl Route {
    /// The route of a search whose start equals its end.
    pub fn trivial(at: Coord) -> Self {
        Self { cost: 0, path: vec![at], legs: Vec::new(), expanded: 0 }
    }

    /// `true` if the route is a single cell.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    pub fn start(&self) -> Coord {
        self.path[0]
    }

    pub fn end(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    /// Number of ferry hops taken.
    pub fn ferry_hops(&self) -> usize {
        self.legs.iter().filter(|l| matches!(l.via, Via::Ferry(_))).count()
    }

    /// Check that this route is internally consistent with `grid` and
    /// `ferries`: legs chain along the path, every grid step moves to an
    /// adjacent passable cell at that cell's cost, every ferry hop matches the
    /// ferry it names, and the leg costs sum to `cost`.
    pub fn verify(&self, grid: &Grid, ferries: &[Ferry]) -> bool {
        if self.path.is_empty() || self.legs.len() + 1 != self.path.len() {
            return false;
        }
        if !self.path.iter().all(|&c| grid.contains(c)) {
            return false;
        }

        let mut total: Cost = 0;
        for (leg, pair) in self.legs.iter().zip(self.path.windows(2)) {
            if leg.from != pair[0] || leg.to != pair[1] {
                return false;
            }
            let ok = match leg.via {
                Via::Step => {
                    leg.from.is_adjacent(leg.to)
                        && grid.cost(leg.to) == Some(TileCost::Passable(leg.cost))
                }
                Via::Ferry(i) => ferries.get(i).is_some_and(|f| {
                    f.origin == leg.from && f.destination == leg.to && f.cost == leg.cost
                }),
            };
            if !ok {
                return false;
            }
            total = match total.checked_add(leg.cost) {
                Some(t) => t,
                None => return false,
            };
        }
        total == self.cost
    }
}
