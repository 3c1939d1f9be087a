//! CSV loaders for the address table and the distance table.
//!
//! # Address CSV
//!
//! One row per node, `node,name,address`.  Rows whose first cell is not an
//! integer (headers, titles) are skipped.  Node IDs must be below the number
//! of address rows.
//!
//! ```csv
//! node,name,address
//! 0,Western Governors University,4001 South 700 East
//! 1,International Peace Gardens,1060 Dalton Ave S
//! ```
//!
//! # Distance CSV
//!
//! A headerless square (or lower-triangular) table of miles, row `i` and
//! column `j` giving the distance between nodes `i` and `j`.  Blank cells
//! are filled from the transpose.
//!
//! ```csv
//! 0.0
//! 7.2,0.0
//! 3.8,7.1,0.0
//! ```

use std::io::Read;
use std::path::Path;

use fleet_core::NodeId;

use crate::{AddressIndex, DistanceMatrix, GeoError, GeoLookup, GeoResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load both tables from disk and pair them into a [`GeoLookup`].
pub fn load_geo_csv(addresses: &Path, distances: &Path) -> GeoResult<GeoLookup> {
    let index = load_addresses_reader(std::fs::File::open(addresses)?)?;
    let matrix = load_distances_reader(std::fs::File::open(distances)?)?;
    GeoLookup::new(index, matrix)
}

/// Parse the address table from any `Read` source.
pub fn load_addresses_reader<R: Read>(reader: R) -> GeoResult<AddressIndex> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<(NodeId, String)> = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|e| GeoError::Parse(e.to_string()))?;
        let Some(node) = row.get(0).and_then(|c| c.trim().parse::<u32>().ok()) else {
            continue;
        };
        let address = row.get(2).map(str::trim).unwrap_or_default();
        if address.is_empty() {
            return Err(GeoError::Parse(format!("node {node} has no address column")));
        }
        rows.push((NodeId(node), address.to_owned()));
    }

    // Node IDs index the distance table, which has one row per address.
    let size = rows.len();
    if let Some(&(node, _)) = rows.iter().find(|(node, _)| node.index() >= size) {
        return Err(GeoError::NodeOutOfRange { node, size });
    }

    let mut index = AddressIndex::new();
    for (node, address) in &rows {
        index.insert(*node, address);
    }
    Ok(index)
}

/// Parse the distance table from any `Read` source.
pub fn load_distances_reader<R: Read>(reader: R) -> GeoResult<DistanceMatrix> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row = result.map_err(|e| GeoError::Parse(e.to_string()))?;
        let cells = row
            .iter()
            .enumerate()
            .map(|(j, cell)| parse_cell(cell, i, j))
            .collect::<GeoResult<Vec<_>>>()?;
        rows.push(cells);
    }
    DistanceMatrix::from_partial_rows(&rows)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_cell(cell: &str, row: usize, col: usize) -> GeoResult<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        GeoError::Parse(format!("distance cell ({row}, {col}) is not a number: {cell:?}"))
    })
}
