//! JSON map loader.
//!
//! # Format
//!
//! A JSON array of rows, each row an array of terrain labels:
//!
//! ```json
//! [
//!   ["plains", "plains", "sea"],
//!   ["mountain", "void", "sea"]
//! ]
//! ```
//!
//! Labels are expected to be strings but are coerced when they are not:
//!
//! | JSON value        | Label                          |
//! |-------------------|--------------------------------|
//! | string            | the string itself              |
//! | `null`            | `""` (classifies as plain)     |
//! | number / boolean  | its textual form               |
//! | array / object    | its compact JSON text          |

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use tp_core::Grid;

use crate::{LoadError, LoadResult};

/// Load a grid from a JSON file.
pub fn load_grid_json(path: &Path) -> LoadResult<Grid> {
    let file = File::open(path)?;
    load_grid_reader(BufReader::new(file))
}

/// Like [`load_grid_json`] but accepts any `Read` source.
pub fn load_grid_reader<R: Read>(reader: R) -> LoadResult<Grid> {
    let value: Value = serde_json::from_reader(reader)?;

    let Value::Array(rows) = value else {
        return Err(LoadError::Parse("map must be a JSON array of rows".into()));
    };

    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(y, row)| match row {
            Value::Array(cells) => Ok(cells.iter().map(label_of).collect::<Vec<String>>()),
            other => Err(LoadError::Parse(format!(
                "map row {y} must be an array, found {}",
                kind_of(&other)
            ))),
        })
        .collect::<LoadResult<Vec<_>>>()?;

    let grid = Grid::from_rows(rows)?;
    debug!(rows = grid.rows(), cols = grid.cols(), "map loaded");
    Ok(grid)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn label_of(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}
