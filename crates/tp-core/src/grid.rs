//! Immutable rectangular terrain grid.
//!
//! # Data layout
//!
//! Labels are stored row-major in a single `Vec`.  Cell `(x, y)` lives at
//! flat index `y * cols + x`.  Alongside the labels the grid keeps the
//! [`Terrain`] class of every cell, computed once at construction with
//! [`classify`]; since classification is a pure function of the label this
//! is indistinguishable from classifying on every lookup.
//!
//! A `Grid` may have zero rows, or rows of zero width.  Such grids are
//! constructible (a loader may legitimately produce them) and are rejected by
//! the route engine at search time.  Rows of differing width are rejected
//! here, so every other consumer may assume rectangularity.

use crate::coord::Coord;
use crate::error::{GridError, GridResult};
use crate::terrain::{classify, Terrain, TileCost};

/// Row-major grid of terrain labels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")
)]
pub struct Grid {
    rows:    usize,
    cols:    usize,
    labels:  Vec<String>,
    terrain: Vec<Terrain>,
}

impl Grid {
    /// A grid with no rows.
    pub fn empty() -> Self {
        Self { rows: 0, cols: 0, labels: Vec::new(), terrain: Vec::new() }
    }

    /// Build a grid from rows of labels.
    ///
    /// The width of the first row fixes `cols`; any later row of a different
    /// width yields [`GridError::Ragged`].
    ///
    /// ```
    /// use tp_core::{Coord, Grid, Terrain};
    ///
    /// let grid = Grid::from_rows([["plains", "sea"], ["Void", "mountain"]]).unwrap();
    /// assert_eq!((grid.cols(), grid.rows()), (2, 2));
    /// assert_eq!(grid.terrain(Coord::new(0, 1)), Some(Terrain::Void));
    /// ```
    pub fn from_rows<I, R, S>(rows: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = Vec::new();
        let mut row_count = 0usize;
        let mut cols = 0usize;

        for (y, row) in rows.into_iter().enumerate() {
            let before = labels.len();
            labels.extend(row.into_iter().map(Into::into));
            let width = labels.len() - before;

            if y == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::Ragged { row: y, expected: cols, found: width });
            }
            row_count += 1;
        }

        // Coordinates are i32; every in-bounds cell must be addressable.
        let addressable = i32::try_from(row_count).is_ok() && i32::try_from(cols).is_ok();
        if !addressable || row_count.checked_mul(cols).is_none() {
            return Err(GridError::TooLarge { rows: row_count, cols });
        }

        let terrain = labels.iter().map(|l| classify(l)).collect();
        Ok(Self { rows: row_count, cols, labels, terrain })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows × cols`).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// `true` if the grid has no rows or zero-width rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    // ── Addressing ────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.cols && (c.y as usize) < self.rows
    }

    /// Flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.y as usize * self.cols + c.x as usize)
        } else {
            None
        }
    }

    /// Coordinate of flat index `idx`.
    ///
    /// # Panics
    /// Panics if the grid has zero width.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx % self.cols) as i32, (idx / self.cols) as i32)
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    pub fn label(&self, c: Coord) -> Option<&str> {
        self.index(c).map(|i| self.labels[i].as_str())
    }

    pub fn terrain(&self, c: Coord) -> Option<Terrain> {
        self.index(c).map(|i| self.terrain[i])
    }

    /// Traversal cost of `c`, or `None` if out of bounds.
    pub fn cost(&self, c: Coord) -> Option<TileCost> {
        self.terrain(c).map(Terrain::cost)
    }

    /// Traversal cost by flat index.  Used on the search hot path.
    #[inline]
    pub fn cost_at(&self, idx: usize) -> TileCost {
        self.terrain[idx].cost()
    }

    /// Iterate over rows as label slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        // `chunks` rejects a zero chunk size; zero-width grids have no labels.
        self.labels.chunks(self.cols.max(1)).take(if self.cols == 0 { 0 } else { self.rows })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<String>>) -> GridResult<Self> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        if grid.cols == 0 {
            return vec![Vec::new(); grid.rows];
        }
        let cols = grid.cols;
        let mut rows = Vec::with_capacity(grid.rows);
        let mut labels = grid.labels.into_iter();
        for _ in 0..grid.rows {
            rows.push(labels.by_ref().take(cols).collect());
        }
        rows
    }
}
