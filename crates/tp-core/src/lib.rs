//! `tp-core` — foundational types for the `tilepath` route engine.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`coord`]     | `Coord`, the `(x, y)` cell address                    |
//! | [`terrain`]   | `Terrain`, `TileCost`, `Cost`, `cost_of`, `classify`  |
//! | [`grid`]      | `Grid` — immutable row-major terrain labels           |
//! | [`ferry`]     | `Ferry` — directed auxiliary edge record              |
//! | [`error`]     | `GridError`, `GridResult`, `CoordParseError`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod ferry;
pub mod grid;
pub mod terrain;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use error::{CoordParseError, GridError, GridResult};
pub use ferry::Ferry;
pub use grid::Grid;
pub use terrain::{classify, cost_of, Cost, Terrain, TileCost};
