use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Load planar points from `.csv` (columns `x`, `y`) or `.json` (`[[x, y], ...]`).
pub fn load_points(path: &str) -> Result<Vec<[f64; 2]>> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let points = match ext.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => bail!("unsupported input `{path}`: expected .csv or .json"),
    };
    tracing::info!(path, n = points.len(), "points_loaded");
    Ok(points)
}

fn load_json(path: &str) -> Result<Vec<[f64; 2]>> {
    let bytes = fs::read(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {path} as [[x, y], ...]"))
}

fn load_csv(path: &str) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y from {path}"))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => Err(anyhow!("{path}: missing coordinate in row {row}")),
        })
        .collect()
}
