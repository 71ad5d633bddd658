//! Plain-text rendering of maps and routes.
//!
//! | Glyph | Meaning           |
//! |-------|-------------------|
//! | `.`   | plain             |
//! | `~`   | sea               |
//! | `^`   | mountain          |
//! | `#`   | void              |
//! | `*`   | route cell        |
//! | `S`   | route start       |
//! | `E`   | route end         |

use std::fmt::Write;

use tp_core::{Coord, Grid, Terrain};
use tp_route::Route;

pub fn terrain_glyph(t: Terrain) -> char {
    match t {
        Terrain::Plain    => '.',
        Terrain::Sea      => '~',
        Terrain::Mountain => '^',
        Terrain::Void     => '#',
    }
}

/// `(x,y) → (x,y) → …`
pub fn path_line(path: &[Coord]) -> String {
    path.iter().map(Coord::to_string).collect::<Vec<_>>().join(" → ")
}

/// One line per grid row, with `route` (if any) drawn over the terrain.
pub fn draw_map(grid: &Grid, route: Option<&Route>) -> String {
    let mut glyphs: Vec<char> = (0..grid.len())
        .map(|i| grid.terrain(grid.coord(i)).map_or(' ', terrain_glyph))
        .collect();

    if let Some(route) = route {
        for &c in &route.path {
            if let Some(i) = grid.index(c) {
                glyphs[i] = '*';
            }
        }
        if let Some(i) = grid.index(route.start()) {
            glyphs[i] = 'S';
        }
        if let Some(i) = grid.index(route.end()) {
            glyphs[i] = 'E';
        }
    }

    let mut out = String::with_capacity(grid.len() + grid.rows());
    if grid.cols() > 0 {
        for row in glyphs.chunks(grid.cols()) {
            out.extend(row);
            out.push('\n');
        }
    }
    out
}

/// Cell count per terrain class, in [`Terrain::ALL`] order.
pub fn terrain_counts(grid: &Grid) -> [(Terrain, usize); 4] {
    let mut counts = Terrain::ALL.map(|t| (t, 0));
    for i in 0..grid.len() {
        if let Some(t) = grid.terrain(grid.coord(i)) {
            counts[t as usize].1 += 1;
        }
    }
    counts
}

/// Summary printed under the `classify` map.
pub fn counts_table(grid: &Grid) -> String {
    let mut out = String::new();
    for (t, n) in terrain_counts(grid) {
        let cost = t.cost();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} {:<9} {:>7}  cost {}", terrain_glyph(t), t.as_str(), n, cost);
    }
    out
}
