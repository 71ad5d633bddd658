//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use tp_core::Coord;
use tp_route::SearchConfig;

#[derive(Parser, Debug)]
#[command(name = "tilepath", version, about = "Minimum-cost routes over terrain maps with ferries")]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).  `RUST_LOG`
    /// overrides this when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the cheapest route between two cells.
    Route(RouteArgs),
    /// Route every pair listed in a CSV file.
    Batch(BatchArgs),
    /// Print the terrain map and a per-terrain cell count.
    Classify(MapArgs),
}

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Map file: JSON array of rows of terrain labels.
    #[arg(long, value_name = "PATH", default_value = "map.json")]
    pub map: PathBuf,
}

#[derive(Args, Debug)]
pub struct NetworkArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Ferry file (`.csv` or JSON).  A missing file means no ferries.
    #[arg(long, value_name = "PATH", default_value = "ferry.json")]
    pub ferries: PathBuf,

    /// Give up once this many cells have been expanded in one search.
    #[arg(long, value_name = "N")]
    pub max_expanded: Option<usize>,
}

impl NetworkArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig { max_expanded: self.max_expanded }
    }
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Start cell as `x,y`.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub from: Coord,

    /// End cell as `x,y`.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub to: Coord,

    /// Print the route as JSON.
    #[arg(long)]
    pub json: bool,

    /// Draw the map with the route overlaid.
    #[arg(long, conflicts_with = "json")]
    pub draw: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// CSV with columns `from_x,from_y,to_x,to_y`.
    #[arg(long, value_name = "PATH")]
    pub pairs: PathBuf,

    /// Output CSV; standard output when omitted.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}
