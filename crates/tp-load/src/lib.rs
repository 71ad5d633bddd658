//! `tp-load` — loading grids and ferry lists into the `tp-core` data model.
//!
//! The route engine only accepts already-normalised data.  This crate is the
//! collaborator that produces it: it reads map and ferry files, coerces
//! loosely-typed JSON into labels and integers, accepts the different ferry
//! record shapes found in the wild, and rejects ragged grids before they ever
//! reach a search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`grid`]   | `load_grid_json`, `load_grid_reader`                        |
//! | [`ferry`]  | `load_ferries`, JSON/CSV ferry loaders, `normalize_ferry`   |
//! | [`error`]  | `LoadError`, `LoadResult<T>`                                |
//!
//! # Ferry record shapes
//!
//! ```json
//! [
//!   { "origin": [3, 4], "destination": [10, 2], "cost": 5 },
//!   { "Origin X": 3, "Origin Y": 4, "Destination X": 10, "Destination Y": 2, "Cost Required": 5 }
//! ]
//! ```
//!
//! See [`ferry::normalize_ferry`] for the full list of accepted field names.

pub mod error;
pub mod ferry;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{LoadError, LoadResult};
pub use ferry::{
    load_ferries, load_ferries_csv, load_ferries_csv_reader, load_ferries_json, load_ferries_reader,
    normalize_ferries, normalize_ferry,
};
pub use grid::{load_grid_json, load_grid_reader};
