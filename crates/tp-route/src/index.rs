//! Per-origin ferry index.
//!
//! # Data layout
//!
//! Ferries are grouped by origin cell in **Compressed Sparse Row (CSR)**
//! format.  Given an origin cell with flat index `c`, its outgoing ferries
//! occupy the slice:
//!
//! ```text
//! targets[ cell_start[c] .. cell_start[c+1] ]
//! ```
//!
//! Within one origin, ferries keep the order of the caller's list, so search
//! expansion order (and therefore tie-breaking) is a function of that list.
//!
//! Ferries with an origin or destination outside the grid are left out of
//! the index.  They could never be expanded, so dropping them here is the
//! same as skipping them at search time.

use tracing::debug;

use tp_core::{Cost, Ferry, Grid};

/// One outgoing ferry, resolved against a grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FerryTarget {
    /// Flat index of the destination cell.
    pub dest:  usize,
    /// Declared ferry cost.
    pub cost:  Cost,
    /// Position of the ferry in the caller's list.
    pub ferry: usize,
}

/// Ferries grouped by origin cell for O(1) lookup during expansion.
///
/// Built for one grid shape; a search must use the grid it was built from.
#[derive(Clone, Debug)]
pub struct FerryIndex {
    rows:       usize,
    cols:       usize,
    /// CSR row pointer.  Length = `rows * cols + 1`.
    cell_start: Vec<u32>,
    targets:    Vec<FerryTarget>,
    /// Number of ferries left out because an endpoint is off the grid.
    inert:      usize,
}

impl FerryIndex {
    /// Index `ferries` against `grid`.
    ///
    /// Time complexity: O(F log F + V) for F ferries and V cells.
    pub fn build(grid: &Grid, ferries: &[Ferry]) -> Self {
        let cells = grid.len();

        let mut resolved: Vec<(usize, FerryTarget)> = ferries
            .iter()
            .enumerate()
            .filter_map(|(i, f)| {
                let origin = grid.index(f.origin)?;
                let dest = grid.index(f.destination)?;
                Some((origin, FerryTarget { dest, cost: f.cost, ferry: i }))
            })
            .collect();
        let inert = ferries.len() - resolved.len();

        // Stable: ferries sharing an origin stay in caller order.
        resolved.sort_by_key(|&(origin, _)| origin);

        let mut cell_start = vec![0u32; cells + 1];
        for &(origin, _) in &resolved {
            cell_start[origin + 1] += 1;
        }
        for i in 1..=cells {
            cell_start[i] += cell_start[i - 1];
        }
        debug_assert_eq!(cell_start[cells] as usize, resolved.len());

        let targets: Vec<FerryTarget> = resolved.into_iter().map(|(_, t)| t).collect();
        debug!(kept = targets.len(), inert, "ferry index built");

        Self { rows: grid.rows(), cols: grid.cols(), cell_start, targets, inert }
    }

    /// Outgoing ferries of the cell at flat index `cell`, in caller order.
    #[inline]
    pub fn out_ferries(&self, cell: usize) -> &[FerryTarget] {
        let start = self.cell_start[cell] as usize;
        let end   = self.cell_start[cell + 1] as usize;
        &self.targets[start..end]
    }

    /// `true` if this index was built for a grid of `grid`'s shape.
    pub fn fits(&self, grid: &Grid) -> bool {
        self.rows == grid.rows() && self.cols == grid.cols()
    }

    /// `(cols, rows)` of the grid this index was built for.
    pub fn shape(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of usable ferries.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of ferries dropped because an endpoint is off the grid.
    pub fn inert(&self) -> usize {
        self.inert
    }
}
