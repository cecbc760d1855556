use alphathick::geom2::Vec2;
use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Exclusive bound on lattice coordinates accepted for exact (`i32`) input.
pub const LATTICE_LIMIT: f64 = (1u32 << 30) as f64;

/// Read the `x` and `y` columns of a CSV (with header) or Parquet table.
///
/// The format is picked by extension: `.parquet`/`.pq` are scanned as
/// Parquet, everything else as CSV. Rows keep their file order.
pub fn read_xy(path: &Path) -> Result<Vec<(f64, f64)>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") | Some("pq") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning parquet {}", path.display()))?,
        _ => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading csv {}", path.display()))?,
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting columns x, y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok((x, y)),
            _ => Err(anyhow!("row {row}: missing or non-numeric coordinate")),
        })
        .collect()
}

/// Exact lattice points; every coordinate must be an integer with `|v| < 2^30`.
pub fn to_lattice(rows: &[(f64, f64)]) -> Result<Vec<Vec2<i32>>> {
    rows.iter()
        .enumerate()
        .map(|(row, &(x, y))| {
            for v in [x, y] {
                if v.fract() != 0.0 || v.abs() >= LATTICE_LIMIT {
                    bail!("row {row}: {v} is not an integer with |v| < 2^30 (use --domain real)");
                }
            }
            Ok(Vec2::new(x as i32, y as i32))
        })
        .collect()
}

pub fn to_real(rows: &[(f64, f64)]) -> Vec<Vec2<f64>> {
    rows.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}
