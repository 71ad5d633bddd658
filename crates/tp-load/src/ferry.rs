//! Ferry list loaders and record normalisation.
//!
//! Ferry lists come from JSON exports or spreadsheets whose field names drift
//! between versions.  Every record, whatever its source, goes through
//! [`normalize_ferry`], which recognises two shapes:
//!
//! 1. **Nested** — `origin` and `destination` are `[x, y]` arrays.  The cost
//!    is the first non-null of `cost`, `c`, `cost required`, `costrequired`.
//! 2. **Flat** — one field per number.  Field names are compared after
//!    removing all whitespace and lower-casing, so `"Origin X"`, `"originx"`
//!    and `"ORIGIN  x"` are the same field.  Candidates, in lookup order:
//!
//! | Value         | Primary names                                   | Fallback names                      |
//! |---------------|-------------------------------------------------|-------------------------------------|
//! | origin x      | `origin x`, `origin_x`, `origin0`, `ox`         | `origin[0]`, `origin_0`             |
//! | origin y      | `origin y`, `origin_y`, `origin1`, `oy`         | `origin[1]`, `origin_1`             |
//! | destination x | `destination x`, `destination_x`, `destx`, `dx` | `destination[0]`, `destination_0`   |
//! | destination y | `destination y`, `destination_y`, `desty`, `dy` | `destination[1]`, `destination_1`   |
//! | cost          | `cost required`, `cost`, `cost_ap_required`, `c` |                                    |
//!
//! Within a group the first name present wins, even when its value is
//! `null`.  A coordinate whose primary value is `null` or absent is looked up
//! among its fallback names instead.  A flat record missing any of the four
//! coordinates is dropped; a missing or `null` value that is kept coerces
//! to 0, as does a missing cost.
//!
//! # Numeric coercion
//!
//! Numbers truncate toward zero; strings are parsed as numbers after trimming
//! (the empty string is 0); booleans are 0 or 1; anything else, including
//! non-finite values, is 0.  Coordinates saturate into `i32`.  A record whose
//! cost comes out negative is dropped with a warning.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use tp_core::{Coord, Ferry};

use crate::LoadResult;

/// Flat-record coordinate names: `(primary, fallback)`.
type Names = (&'static [&'static str], &'static [&'static str]);

const ORIGIN_X: Names = (&["origin x", "originx", "origin_x", "origin0", "ox"], &["origin[0]", "origin_0"]);
const ORIGIN_Y: Names = (&["origin y", "originy", "origin_y", "origin1", "oy"], &["origin[1]", "origin_1"]);
const DEST_X: Names = (
    &["destination x", "destinationx", "destination_x", "destx", "dx"],
    &["destination[0]", "destination_0"],
);
const DEST_Y: Names = (
    &["destination y", "destinationy", "destination_y", "desty", "dy"],
    &["destination[1]", "destination_1"],
);
const COST: &[&str] = &["cost required", "costrequired", "cost", "cost_ap_required", "costaprequired", "c"];
/// Cost keys of the nested shape, matched exactly.
const NESTED_COST: &[&str] = &["cost", "c", "cost required", "costrequired"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load ferries from `path`, choosing the format by extension: `.csv` is
/// read as CSV, anything else as JSON.
///
/// A missing file yields an empty list, so maps without ferries need no
/// placeholder file.
pub fn load_ferries(path: &Path) -> LoadResult<Vec<Ferry>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv { load_ferries_csv(path) } else { load_ferries_json(path) }
}

/// Load ferries from a JSON file holding an array of records.
///
/// A missing file yields an empty list and a warning.
pub fn load_ferries_json(path: &Path) -> LoadResult<Vec<Ferry>> {
    match open_optional(path)? {
        Some(file) => load_ferries_reader(BufReader::new(file)),
        None => Ok(Vec::new()),
    }
}

/// Like [`load_ferries_json`] but accepts any `Read` source.
///
/// A top-level value that is not an array yields an empty list and a warning.
pub fn load_ferries_reader<R: Read>(reader: R) -> LoadResult<Vec<Ferry>> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(records) => Ok(normalize_ferries(&records)),
        _ => {
            warn!("ferry list is not a JSON array; proceeding with no ferries");
            Ok(Vec::new())
        }
    }
}

/// Load ferries from a CSV file with a header row; each row is normalised as
/// a flat record.  A missing file yields an empty list and a warning.
pub fn load_ferries_csv(path: &Path) -> LoadResult<Vec<Ferry>> {
    match open_optional(path)? {
        Some(file) => load_ferries_csv_reader(file),
        None => Ok(Vec::new()),
    }
}

/// Like [`load_ferries_csv`] but accepts any `Read` source.
pub fn load_ferries_csv_reader<R: Read>(reader: R) -> LoadResult<Vec<Ferry>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<FxHashMap<String, String>>() {
        let row = result?;
        let object: Map<String, Value> = row.into_iter().map(|(k, v)| (k, Value::String(v))).collect();
        records.push(Value::Object(object));
    }
    Ok(normalize_ferries(&records))
}

/// Normalise every record, dropping the ones that cannot be read.
pub fn normalize_ferries(records: &[Value]) -> Vec<Ferry> {
    let ferries: Vec<Ferry> = records.iter().filter_map(normalize_ferry).collect();
    debug!(loaded = ferries.len(), dropped = records.len() - ferries.len(), "ferries normalised");
    ferries
}

/// Normalise one ferry record, or `None` if it is unusable.
pub fn normalize_ferry(record: &Value) -> Option<Ferry> {
    let Value::Object(fields) = record else {
        return None;
    };

    let (origin, destination, cost) = match (fields.get("origin"), fields.get("destination")) {
        (Some(Value::Array(o)), Some(Value::Array(d))) => {
            let cost = NESTED_COST
                .iter()
                .find_map(|k| fields.get(*k).filter(|v| !v.is_null()));
            (pair(o), pair(d), cost.map_or(0, int_or_zero))
        }
        _ => {
            let lookup = FieldLookup::new(fields);
            let origin = (lookup.coordinate(ORIGIN_X)?, lookup.coordinate(ORIGIN_Y)?);
            let destination = (lookup.coordinate(DEST_X)?, lookup.coordinate(DEST_Y)?);
            let cost = lookup.pick(COST).map_or(0, int_or_zero);
            (
                coord(int_or_zero(origin.0), int_or_zero(origin.1)),
                coord(int_or_zero(destination.0), int_or_zero(destination.1)),
                cost,
            )
        }
    };

    let Ok(cost) = u64::try_from(cost) else {
        warn!(%origin, %destination, cost, "dropping ferry with negative cost");
        return None;
    };
    Some(Ferry { origin, destination, cost })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open_optional(path: &Path) -> LoadResult<Option<File>> {
    match File::open(path) {
        Ok(f) => Ok(Some(f)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "ferry file not found; proceeding with no ferries");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Record fields keyed by normalised name.
struct FieldLookup<'a> {
    fields: FxHashMap<String, &'a Value>,
}

impl<'a> FieldLookup<'a> {
    fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields: fields.iter().map(|(k, v)| (normalize_key(k), v)).collect() }
    }

    /// First candidate present, whatever its value.
    fn pick(&self, candidates: &[&str]) -> Option<&'a Value> {
        candidates.iter().find_map(|c| self.fields.get(&normalize_key(c)).copied())
    }

    /// Primary names first; the fallback names only when that yields nothing
    /// or `null`.
    fn coordinate(&self, (primary, fallback): Names) -> Option<&'a Value> {
        match self.pick(primary) {
            Some(v) if !v.is_null() => Some(v),
            _ => self.pick(fallback),
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

fn pair(items: &[Value]) -> Coord {
    let at = |i: usize| items.get(i).map_or(0, int_or_zero);
    coord(at(0), at(1))
}

fn coord(x: i64, y: i64) -> Coord {
    Coord::new(saturate(x), saturate(y))
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Loose numeric coercion; see the module docs.
fn int_or_zero(v: &Value) -> i64 {
    let n = match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => return i,
            None => n.as_f64().unwrap_or(0.0),
        },
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse::<f64>().unwrap_or(f64::NAN) }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    // `as` saturates for finite out-of-range values.
    if n.is_finite() { n.trunc() as i64 } else { 0 }
}
