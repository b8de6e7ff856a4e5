//! Tabular sweep output: one row per degenerate slope.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use primetri::sweep::{HypothesisViolation, PrimeReport};
use serde::Serialize;

/// Flat record of one degenerate slope; also the JSON shape of `check --json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FindingRow {
    pub p: i64,
    pub residue: i64,
    pub slope: i64,
    pub a: [i64; 2],
    pub b: [i64; 2],
    pub c: [i64; 2],
    pub d: [i64; 2],
    pub residue_violation: bool,
    pub inverse_violation: bool,
}

pub fn rows(reports: &[PrimeReport]) -> Vec<FindingRow> {
    let mut out = Vec::new();
    for report in reports {
        for finding in &report.findings {
            let q = finding.counterexample.quad;
            let xy = |v: primetri::Lat2| [v.x, v.y];
            out.push(FindingRow {
                p: report.p,
                residue: report.p % 6,
                slope: finding.slope,
                a: xy(q.a),
                b: xy(q.b),
                c: xy(q.c),
                d: xy(q.d),
                residue_violation: finding
                    .violations
                    .iter()
                    .any(|v| matches!(v, HypothesisViolation::ResidueMod6 { .. })),
                inverse_violation: finding
                    .violations
                    .iter()
                    .any(|v| matches!(v, HypothesisViolation::InverseIdentity { .. })),
            });
        }
    }
    out
}

pub fn to_frame(rows: &[FindingRow]) -> Result<DataFrame> {
    let col = |f: fn(&FindingRow) -> i64| rows.iter().map(f).collect::<Vec<i64>>();
    let df = df!(
        "p" => col(|r| r.p),
        "residue" => col(|r| r.residue),
        "slope" => col(|r| r.slope),
        "a_x" => col(|r| r.a[0]),
        "a_y" => col(|r| r.a[1]),
        "b_x" => col(|r| r.b[0]),
        "b_y" => col(|r| r.b[1]),
        "c_x" => col(|r| r.c[0]),
        "c_y" => col(|r| r.c[1]),
        "d_x" => col(|r| r.d[0]),
        "d_y" => col(|r| r.d[1]),
        "residue_violation" => rows.iter().map(|r| r.residue_violation).collect::<Vec<bool>>(),
        "inverse_violation" => rows.iter().map(|r| r.inverse_violation).collect::<Vec<bool>>()
    )?;
    Ok(df)
}

/// Write `rows` as CSV or Parquet, chosen by the extension of `path`.
pub fn write_rows(path: &Path, rows: &[FindingRow]) -> Result<()> {
    let mut df = to_frame(rows)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        "parquet" => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        other => bail!("unsupported table extension {other:?} (expected csv or parquet)"),
    }
    Ok(())
}
