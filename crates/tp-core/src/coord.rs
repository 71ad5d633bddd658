//! Cell coordinates.
//!
//! A cell is addressed by `(x, y)` where `x` is the column and `y` the row.
//! Components are signed so that caller-supplied coordinates outside the grid
//! (including negative ones) are representable and can be rejected by bounds
//! checks instead of failing earlier at parse time.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordParseError;

/// A grid cell address: `x` = column index, `y` = row index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.  Saturates instead of overflowing so
    /// that neighbours of extreme coordinates stay out of bounds.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// `true` if `other` is one of the eight cells surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Parses `"x,y"`, optionally wrapped in parentheses, with arbitrary
/// whitespace around each component.
impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| CoordParseError(s.to_owned()))?;
        let x = x.trim().parse::<i32>().map_err(|_| CoordParseError(s.to_owned()))?;
        let y = y.trim().parse::<i32>().map_err(|_| CoordParseError(s.to_owned()))?;
        Ok(Coord::new(x, y))
    }
}
