//! `tp-route` — minimum-cost routing over terrain grids with ferries.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`index`]  | `FerryIndex` — ferries grouped by origin cell (CSR)         |
//! | [`search`] | `find_path`, `find_path_with`, `find_path_indexed`, `SearchConfig` |
//! | [`route`]  | `Route`, `Leg`, `Via`                                       |
//! | [`router`] | `Router` trait, `DijkstraRouter`, `route_many`             |
//! | [`error`]  | `RouteError`, `Endpoint`, `RouteResult<T>`                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `route_many` fans pairs out over the Rayon thread pool.   |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |
//!
//! # Example
//!
//! ```
//! use tp_core::{Coord, Ferry, Grid};
//! use tp_route::find_path;
//!
//! let grid = Grid::from_rows([["plains"; 3]; 3]).unwrap();
//! let ferries = [Ferry::new((0, 0), (2, 2), 1)];
//! let route = find_path(&grid, &ferries, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! assert_eq!(route.cost, 1);
//! assert_eq!(route.path, vec![Coord::new(0, 0), Coord::new(2, 2)]);
//! ```

pub mod error;
pub mod index;
pub mod route;
pub mod router;
pub mod search;


pub use error::{Endpoint, RouteError, RouteResult};
pub use index::FerryIndex;
pub use route::{Leg, Route, Via};
pub use router::{route_many, DijkstraRouter, Router};
pub use search::{find_path, find_path_indexed, find_path_with, SearchConfig};
