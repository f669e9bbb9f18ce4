use std::fmt;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Status filter: "All" or one exact status value
// ---------------------------------------------------------------------------

/// Current status-filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No filter – every row passes, including rows with a missing status.
    #[default]
    All,
    Only(CellValue),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Only(v) => write!(f, "{v}"),
        }
    }
}

/// Values offered in the filter selector besides "All":
/// distinct non-missing statuses, sorted ascending.
pub fn status_choices(table: &Table, status: usize) -> Vec<CellValue> {
    table.distinct_values(status).into_iter().collect()
}

/// Rows whose status equals the selected value (exact, case-sensitive),
/// or the whole table for [`StatusFilter::All`].
pub fn filter_rows(table: &Table, status: usize, filter: &StatusFilter) -> Table {
    match filter {
        StatusFilter::All => table.clone(),
        StatusFilter::Only(selected) => {
            let rows: Vec<usize> = table
                .column(status)
                .iter()
                .enumerate()
                .filter(|(_, v)| *v == selected)
                .map(|(i, _)| i)
                .collect();
            table.select_rows(&rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_bytes;

    fn jobs() -> Table {
        load_csv_bytes(b"id,status,risk\nA,late,0.9\nB,ontime,0.2\nC,late,abc\nD,,0.8\nE,Late,0.95\n")
            .unwrap()
    }

    #[test]
    fn choices_are_sorted_and_skip_missing() {
        let choices = status_choices(&jobs(), 1);
        let labels: Vec<String> = choices.iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, vec!["Late", "late", "ontime"]);
    }

    #[test]
    fn numeric_statuses_sort_numerically() {
        let table = load_csv_bytes(b"id,status\nA,10\nB,2\nC,2\n").unwrap();
        assert_eq!(
            status_choices(&table, 1),
            vec![CellValue::Number(2.0), CellValue::Number(10.0)]
        );
    }

    #[test]
    fn all_keeps_rows_with_missing_status() {
        let table = jobs();
        let out = filter_rows(&table, 1, &StatusFilter::All);
        assert_eq!(out, table);
    }

    #[test]
    fn only_matches_exactly_and_case_sensitively() {
        let out = filter_rows(
            &jobs(),
            1,
            &StatusFilter::Only(CellValue::Text("late".into())),
        );
        assert_eq!(out.len(), 2);
        assert!(out
            .column(1)
            .iter()
            .all(|v| *v == CellValue::Text("late".into())));
        assert_eq!(out.cell(1, 0), &CellValue::Text("C".into()));
    }

    #[test]
    fn unknown_value_yields_empty_table() {
        let out = filter_rows(
            &jobs(),
            1,
            &StatusFilter::Only(CellValue::Text("cancelled".into())),
        );
        assert!(out.is_empty());
        assert_eq!(out.n_columns(), 3);
    }

    #[test]
    fn display_uses_all_sentinel() {
        assert_eq!(StatusFilter::All.to_string(), "All");
        assert_eq!(
            StatusFilter::Only(CellValue::Text("late".into())).to_string(),
            "late"
        );
    }
}
