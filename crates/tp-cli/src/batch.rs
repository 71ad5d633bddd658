//! Batch routing CSV formats.
//!
//! Input rows are `from_x,from_y,to_x,to_y`.  Output rows add `cost` and
//! `steps` (legs taken) for routed pairs, or `error` for the rest; the unused
//! columns are left empty.

use std::io::{Read, Write};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tp_core::{Coord, Cost};
use tp_route::{Route, RouteResult};

#[derive(Debug, Deserialize)]
struct PairRecord {
    from_x: i32,
    from_y: i32,
    to_x:   i32,
    to_y:   i32,
}

#[derive(Debug, Serialize)]
struct ResultRecord {
    from_x: i32,
    from_y: i32,
    to_x:   i32,
    to_y:   i32,
    cost:   Option<Cost>,
    steps:  Option<usize>,
    error:  Option<String>,
}

pub fn read_pairs<R: Read>(reader: R) -> anyhow::Result<Vec<(Coord, Coord)>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut pairs = Vec::new();
    for (i, result) in rdr.deserialize::<PairRecord>().enumerate() {
        let r = result.with_context(|| format!("pairs row {}", i + 1))?;
        pairs.push((Coord::new(r.from_x, r.from_y), Coord::new(r.to_x, r.to_y)));
    }
    Ok(pairs)
}

/// Write one output row per pair, in input order.
pub fn write_results<W: Write>(
    writer: W,
    pairs: &[(Coord, Coord)],
    results: &[RouteResult<Route>],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (&(from, to), result) in pairs.iter().zip(results) {
        let (cost, steps, error) = match result {
            Ok(route) => (Some(route.cost), Some(route.legs.len()), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        wtr.serialize(ResultRecord {
            from_x: from.x,
            from_y: from.y,
            to_x: to.x,
            to_y: to.y,
            cost,
            steps,
            error,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
