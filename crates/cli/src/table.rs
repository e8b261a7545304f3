//! Tabular files via polars: point sets (`x,y`) and perf sweeps.
//!
//! CSV is the default; a `.parquet` extension switches the writer.

use anyhow::{bail, Context, Result};
use chull::api::{PerfRow, Point2};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Read a point set from a CSV with integer columns `x` and `y`.
///
/// Non-integer columns (e.g. floats) and values outside `i32` are errors, never truncated.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    points_from_frame(&df).with_context(|| format!("decoding points in {}", path.display()))
}

fn int_column(df: &DataFrame, name: &str) -> Result<Int32Chunked> {
    let column = df.column(name)?;
    let dtype = column.dtype();
    if !dtype.is_integer() {
        bail!("column `{name}` must hold integers, found {dtype}");
    }
    let cast = column
        .strict_cast(&DataType::Int32)
        .with_context(|| format!("column `{name}` does not fit in i32"))?;
    Ok(cast.i32()?.clone())
}

fn points_from_frame(df: &DataFrame) -> Result<Vec<Point2>> {
    let xs = int_column(df, "x")?;
    let ys = int_column(df, "y")?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point2::new(x, y)),
            _ => bail!("row {row}: missing or non-integer coordinate"),
        }
    }
    Ok(out)
}

pub fn points_frame(points: &[Point2]) -> Result<DataFrame> {
    let xs: Vec<i32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

pub fn perf_frame(rows: &[PerfRow]) -> Result<DataFrame> {
    let n: Vec<u64> = rows.iter().map(|r| r.n as u64).collect();
    let replay_index: Vec<u64> = rows.iter().map(|r| r.replay.index).collect();
    let sweep: Vec<f64> = rows.iter().map(|r| r.sweep.as_secs_f64() * 1e3).collect();
    let exhaustive: Vec<f64> = rows
        .iter()
        .map(|r| r.exhaustive.as_secs_f64() * 1e3)
        .collect();
    let agree: Vec<bool> = rows.iter().map(|r| r.agree).collect();
    Ok(df!(
        "n" => n,
        "replay_index" => replay_index,
        "sweep_ms" => sweep,
        "exhaustive_ms" => exhaustive,
        "agree" => agree
    )?)
}

/// Write `df` to `path`, creating parent directories.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
