//! Directed auxiliary edges ("ferries").
//!
//! A ferry connects two specific cells regardless of adjacency, at its own
//! declared cost.  Ferries are one-way: a ferry from A to B says nothing about
//! travel from B to A.
//!
//! Ferries have no identity beyond their position in the list a caller
//! supplies; duplicates and several ferries sharing an origin are legal.  A
//! ferry whose endpoints fall outside a particular grid is not malformed — it
//! is simply never used when searching that grid.

use std::fmt;

use crate::coord::Coord;
use crate::terrain::Cost;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ferry {
    pub origin:      Coord,
    pub destination: Coord,
    /// Replaces the destination cell's terrain cost for this hop.
    pub cost:        Cost,
}

impl Ferry {
    #[inline]
    pub fn new(origin: impl Into<Coord>, destination: impl Into<Coord>, cost: Cost) -> Self {
        Self { origin: origin.into(), destination: destination.into(), cost }
    }
}

impl fmt::Display for Ferry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.origin, self.destination, self.cost)
    }
}
