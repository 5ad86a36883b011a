//! Adjacency-matrix files: JSON (array of rows) or header-less CSV.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::DMatrix;
use planarity::graph::adjacency_from_rows;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Load a square 0/1 matrix; entry validation happens in `Graph::from_adjacency`.
pub fn load_matrix(path: &Path) -> Result<DMatrix<u8>> {
    let rows = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => csv_rows(path)?,
        Some("json") | None => json_rows(path)?,
        Some(other) => bail!("unsupported matrix file extension `{other}` (use .json or .csv)"),
    };
    adjacency_from_rows(&rows).with_context(|| format!("reading {}", path.display()))
}

fn json_rows(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {} as rows", path.display()))
}

fn csv_rows(path: &Path) -> Result<Vec<Vec<u8>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let mut rows = vec![Vec::with_capacity(df.width()); df.height()];
    for column in df.get_columns() {
        let values = column.cast(&DataType::Int64)?;
        for (i, value) in values.i64()?.into_iter().enumerate() {
            let value = value.ok_or_else(|| anyhow!("empty cell in row {i}"))?;
            let entry = u8::try_from(value)
                .map_err(|_| anyhow!("entry {value} in row {i} is not a 0/1 value"))?;
            rows[i].push(entry);
        }
    }
    Ok(rows)
}
