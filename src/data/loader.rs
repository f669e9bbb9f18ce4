use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{CellValue, Table};

/// Tokens read as missing values (besides the empty cell).
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a table from a file on disk.  Only `.csv` is accepted.
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading {}", path.display()))?;
            load_csv_bytes(&bytes)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse uploaded CSV bytes into a [`Table`].
///
/// Layout: a header row with column names, then one record per row.
/// * empty header names become `Unnamed: {index}`, duplicates get `.1`, `.2`, …
/// * short rows are padded with missing cells, long rows are an error
/// * each column is numeric when all its non-missing cells parse as numbers,
///   text otherwise
pub fn load_csv_bytes(bytes: &[u8]) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let raw_headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if raw_headers.is_empty() {
        bail!("No columns to parse from file");
    }
    let column_names = normalize_headers(&raw_headers);
    let n_cols = column_names.len();

    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); n_cols];
    let mut n_rows = 0;

    for result in reader.records() {
        let record = result.with_context(|| format!("CSV data row {}", n_rows + 1))?;

        if record.len() > n_cols {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            bail!(
                "Expected {n_cols} fields in line {line}, saw {}",
                record.len()
            );
        }

        for (col_idx, column) in raw_columns.iter_mut().enumerate() {
            column.push(record.get(col_idx).and_then(raw_cell));
        }
        n_rows += 1;
    }

    let columns = raw_columns.into_iter().map(infer_column).collect();
    Ok(Table::new(column_names, columns, n_rows))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for (idx, header) in raw.iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header.clone()
        };

        let mut name = base.clone();
        while seen.contains(&name) {
            let count = counts.entry(base.clone()).or_insert(0);
            *count += 1;
            name = format!("{base}.{count}");
        }
        seen.insert(name.clone());
        names.push(name);
    }
    names
}

/// `None` for cells that read as missing.
fn raw_cell(s: &str) -> Option<String> {
    if s.is_empty() || NA_TOKENS.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn infer_column(raw: Vec<Option<String>>) -> Vec<CellValue> {
    let numeric = raw
        .iter()
        .flatten()
        .all(|s| parse_number(s).is_some());

    raw.into_iter()
        .map(|cell| match cell {
            None => CellValue::Missing,
            Some(s) if numeric => parse_number(&s).map_or(CellValue::Missing, CellValue::Number),
            Some(s) => CellValue::Text(s),
        })
        .collect()
}
