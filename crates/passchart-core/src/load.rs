// File: crates/passchart-core/src/load.rs
// Summary: Result set loaders for JSON (object or array) and CSV (one row per pass) files.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::result::{Pass, ResultSet};

/// Parse result sets from JSON text: a single object or an array of them.
pub fn parse_json(text: &str) -> Result<Vec<ResultSet>> {
    let value: Value = serde_json::from_str(text).context("parsing result set JSON")?;
    if value.is_array() {
        serde_json::from_value(value).context("decoding result set array")
    } else {
        let one: ResultSet = serde_json::from_value(value).context("decoding result set")?;
        Ok(vec![one])
    }
}

pub fn load_json(path: &Path) -> Result<Vec<ResultSet>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&text).with_context(|| format!("in {}", path.display()))
}

/// Load one result set from CSV.
///
/// Header: `pass,color,<label>...`. Each row is one pass; an empty cell is a gap.
/// The file stem becomes both the test name and the canvas id.
pub fn load_csv(path: &Path) -> Result<ResultSet> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chart")
        .to_string();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(rdr, &stem).with_context(|| format!("in {}", path.display()))
}

fn read_csv<R: std::io::Read>(mut rdr: csv::Reader<R>, name: &str) -> Result<ResultSet> {
    let headers = rdr.headers()?.clone();
    let lower = |i: usize| headers.get(i).map(|h| h.to_lowercase());
    if lower(0).as_deref() != Some("pass") || lower(1).as_deref() != Some("color") {
        bail!("expected header 'pass,color,<labels>...'");
    }
    let labels: Vec<String> = headers.iter().skip(2).map(str::to_string).collect();

    let mut result = ResultSet::new(name, name, labels);
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let pass_name = rec.get(0).unwrap_or_default();
        let color = rec.get(1).unwrap_or_default();
        let mut results = Vec::with_capacity(rec.len().saturating_sub(2));
        for (col, cell) in rec.iter().enumerate().skip(2) {
            if cell.is_empty() {
                results.push(None);
            } else {
                let v = cell
                    .parse::<f64>()
                    .with_context(|| format!("row {}, column {}: '{}' is not a number", row + 1, col + 1, cell))?;
                results.push(Some(v));
            }
        }
        result.passes.push(Pass::with_gaps(pass_name, color, results));
    }
    Ok(result)
}

/// Load by extension: `.json` yields any number of result sets, `.csv` exactly one.
pub fn load_path(path: &Path) -> Result<Vec<ResultSet>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => load_json(path),
        "csv" => Ok(vec![load_csv(path)?]),
        _ => bail!("unsupported result file '{}' (expected .json or .csv)", path.display()),
    }
}
