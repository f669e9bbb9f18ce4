use super::model::{CellValue, Table};

/// Coerce one cell to a number. Anything that does not parse becomes
/// [`CellValue::Missing`]; this never fails.
pub fn to_numeric(cell: &CellValue) -> CellValue {
    let parsed = match cell {
        CellValue::Number(v) => Some(*v),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Missing => None,
    };
    match parsed {
        Some(v) if !v.is_nan() => CellValue::Number(v),
        _ => CellValue::Missing,
    }
}

/// Derived table whose risk column holds only numbers or missing cells.
pub fn normalize_risk(table: &Table, risk: usize) -> Table {
    let source = table.column(risk);
    let values: Vec<CellValue> = source.iter().map(to_numeric).collect();

    let coerced = source
        .iter()
        .zip(&values)
        .filter(|(before, after)| !before.is_missing() && after.is_missing())
        .count();
    if coerced > 0 {
        log::debug!(
            "{coerced} value(s) in risk column '{}' are not numeric and were treated as missing",
            table.column_names()[risk]
        );
    }

    table.with_column(risk, values)
}
