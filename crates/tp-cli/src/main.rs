//! `tilepath` — command-line front end for the tilepath route engine.
//!
//! # Usage
//!
//! ```text
//! tilepath route    --map map.json [--ferries ferry.json] --from 0,0 --to 9,4 [--json | --draw]
//! tilepath batch    --map map.json [--ferries ferry.csv] --pairs pairs.csv [--out results.csv]
//! tilepath classify --map map.json
//! ```
//!
//! Logging goes to stderr and defaults to `warn`; `-v` raises it and
//! `RUST_LOG` overrides both.

mod args;
mod batch;
mod render;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tp_core::{Ferry, Grid};
use tp_load::{load_ferries, load_grid_json};
use tp_route::{find_path_with, route_many, DijkstraRouter, RouteError};

use crate::args::{BatchArgs, Cli, Command, MapArgs, NetworkArgs, RouteArgs};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Route(args)    => run_route(args),
        Command::Batch(args)    => run_batch(args),
        Command::Classify(args) => run_classify(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ── Loading ───────────────────────────────────────────────────────────────────

fn load_map(args: &MapArgs) -> anyhow::Result<Grid> {
    load_grid_json(&args.map).with_context(|| format!("loading map {}", args.map.display()))
}

fn load_network(args: &NetworkArgs) -> anyhow::Result<(Grid, Vec<Ferry>)> {
    let grid = load_map(&args.map)?;
    let ferries = load_ferries(&args.ferries)
        .with_context(|| format!("loading ferries {}", args.ferries.display()))?;
    info!(rows = grid.rows(), cols = grid.cols(), ferries = ferries.len(), "network loaded");
    Ok((grid, ferries))
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_route(args: &RouteArgs) -> anyhow::Result<ExitCode> {
    let (grid, ferries) = load_network(&args.network)?;
    let config = args.network.search_config();

    let route = match find_path_with(&grid, &ferries, args.from, args.to, &config) {
        Ok(route) => route,
        Err(RouteError::NoPathFound { .. }) => {
            println!("No valid path found.");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(cost = route.cost, expanded = route.expanded, hops = route.ferry_hops(), "route found");

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &route)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Total Cost: {} AP", route.cost)?;
        writeln!(out, "{}", render::path_line(&route.path))?;
        if args.draw {
            writeln!(out)?;
            write!(out, "{}", render::draw_map(&grid, Some(&route)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_batch(args: &BatchArgs) -> anyhow::Result<ExitCode> {
    let (grid, ferries) = load_network(&args.network)?;

    let file = File::open(&args.pairs)
        .with_context(|| format!("opening pairs {}", args.pairs.display()))?;
    let pairs = batch::read_pairs(BufReader::new(file))?;

    let router = DijkstraRouter::new(args.network.search_config());
    let t0 = Instant::now();
    let results = route_many(&router, &grid, &ferries, &pairs);
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        pairs = pairs.len(),
        failed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "batch routed"
    );

    let out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    batch::write_results(out, &pairs, &results)?;
    Ok(ExitCode::SUCCESS)
}

fn run_classify(args: &MapArgs) -> anyhow::Result<ExitCode> {
    let grid = load_map(args)?;
    let mut out = io::stdout().lock();
    write!(out, "{}", render::draw_map(&grid, None))?;
    writeln!(out)?;
    write!(out, "{}", render::counts_table(&grid))?;
    Ok(ExitCode::SUCCESS)
}
