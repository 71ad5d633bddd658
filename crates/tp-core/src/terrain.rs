//! Terrain cost model.
//!
//! A terrain label is an opaque string.  It is classified by case-insensitive
//! substring matching against an ordered rule table; the first rule that
//! matches wins:
//!
//! | Order | Keyword      | Terrain            | Cost       |
//! |-------|--------------|--------------------|------------|
//! | 1     | `"void"`     | [`Terrain::Void`]     | impassable |
//! | 2     | `"mountain"` | [`Terrain::Mountain`] | 2          |
//! | 3     | `"sea"`      | [`Terrain::Sea`]      | 2          |
//! | —     | *(none)*     | [`Terrain::Plain`]    | 1          |
//!
//! `"void"` is checked first so that a label naming both `"void"` and another
//! keyword is impassable.  Every string classifies, including the empty one.

use std::fmt;

/// Accumulated or per-step traversal cost.
pub type Cost = u64;

/// Cost of entering a cell: a finite non-negative weight, or impassable.
///
/// The derived ordering places `Impassable` above every `Passable` value, so
/// the sentinel compares larger than any finite accumulated cost.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileCost {
    Passable(Cost),
    Impassable,
}

impl TileCost {
    /// The finite cost, or `None` for impassable cells.
    #[inline]
    pub fn finite(self) -> Option<Cost> {
        match self {
            TileCost::Passable(c) => Some(c),
            TileCost::Impassable => None,
        }
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, TileCost::Passable(_))
    }
}

impl fmt::Display for TileCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileCost::Passable(c) => write!(f, "{c}"),
            TileCost::Impassable => f.write_str("impassable"),
        }
    }
}

/// The terrain class a label resolves to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Void,
    Mountain,
    Sea,
    /// Any label matching no keyword.
    Plain,
}

impl Terrain {
    /// Every terrain class, in rule order.
    pub const ALL: [Terrain; 4] = [Terrain::Void, Terrain::Mountain, Terrain::Sea, Terrain::Plain];

    #[inline]
    pub fn cost(self) -> TileCost {
        match self {
            Terrain::Void     => TileCost::Impassable,
            Terrain::Mountain => TileCost::Passable(2),
            Terrain::Sea      => TileCost::Passable(2),
            Terrain::Plain    => TileCost::Passable(1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Void     => "void",
            Terrain::Mountain => "mountain",
            Terrain::Sea      => "sea",
            Terrain::Plain    => "plain",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword rules in match order.  `Plain` is the fallthrough.
const RULES: [(&str, Terrain); 3] = [
    ("void", Terrain::Void),
    ("mountain", Terrain::Mountain),
    ("sea", Terrain::Sea),
];

/// Classify a terrain label.  Total and side-effect free.
pub fn classify(label: &str) -> Terrain {
    let lower = label.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(Terrain::Plain, |&(_, terrain)| terrain)
}

/// Traversal cost of a cell carrying `label`.
#[inline]
pub fn cost_of(label: &str) -> TileCost {
    classify(label).cost()
}
