use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of an uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value.
/// Used in `BTreeSet`s downstream (distinct status values) so it must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// Absent in the file, an NA token, or a failed numeric coercion.
    Missing,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Missing => 0,
                Number(_) => 1,
                Text(_) => 2,
            }
        }
        match (self, other) {
            (Missing, Missing) => std::cmp::Ordering::Equal,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => discriminant(self).cmp(&discriminant(other)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Missing => write!(f, "<missing>"),
        }
    }
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric view of the cell; only `Number` qualifies.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Label used for chart categories, legends and alert messages.
    /// `None` for missing cells.
    pub fn label(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            other => Some(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded CSV, column-oriented
// ---------------------------------------------------------------------------

/// An uploaded table: named columns of equal length. Loaded tables have
/// unique names; a preview may repeat one when roles share a column.
///
/// Tables are never mutated in place; filtering and normalisation build
/// derived tables that keep the same column layout, so column indices
/// resolved against the loaded table stay valid for every derived one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    column_names: Vec<String>,
    columns: Vec<Vec<CellValue>>,
    n_rows: usize,
}

impl Table {
    /// Build a table from named columns. Every column must have `n_rows` cells.
    pub fn new(column_names: Vec<String>, columns: Vec<Vec<CellValue>>, n_rows: usize) -> Self {
        debug_assert_eq!(column_names.len(), columns.len());
        debug_assert!(columns.iter().all(|c| c.len() == n_rows));
        Table {
            column_names,
            columns,
            n_rows,
        }
    }

    /// Ordered column names, as in the header row.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// Cells of the column at `idx`. Panics if out of range.
    pub fn column(&self, idx: usize) -> &[CellValue] {
        &self.columns[idx]
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        &self.columns[col][row]
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Derived table keeping only `rows`, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|col| rows.iter().map(|&r| col[r].clone()).collect())
            .collect();
        Table::new(self.column_names.clone(), columns, rows.len())
    }

    /// Derived table keeping at most the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        let rows: Vec<usize> = (0..self.n_rows.min(n)).collect();
        self.select_rows(&rows)
    }

    /// Derived table with column `idx` replaced by `values`.
    pub fn with_column(&self, idx: usize, values: Vec<CellValue>) -> Table {
        debug_assert_eq!(values.len(), self.n_rows);
        let mut columns = self.columns.clone();
        columns[idx] = values;
        Table::new(self.column_names.clone(), columns, self.n_rows)
    }

    /// Sorted distinct non-missing values of column `idx`.
    pub fn distinct_values(&self, idx: usize) -> BTreeSet<CellValue> {
        self.columns[idx]
            .iter()
            .filter(|v| !v.is_missing())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample() -> Table {
        Table::new(
            vec!["id".into(), "status".into()],
            vec![
                vec![text("A"), text("B"), text("C")],
                vec![text("late"), CellValue::Missing, text("early")],
            ],
            3,
        )
    }

    #[test]
    fn ordering_puts_missing_first_and_compares_numbers_numerically() {
        let mut values = vec![
            text("b"),
            CellValue::Number(10.0),
            CellValue::Missing,
            CellValue::Number(2.0),
            text("a"),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                CellValue::Missing,
                CellValue::Number(2.0),
                CellValue::Number(10.0),
                text("a"),
                text("b"),
            ]
        );
    }

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(CellValue::Number(1.0).to_string(), "1");
        assert_eq!(CellValue::Number(0.9).to_string(), "0.9");
        assert_eq!(CellValue::Missing.label(), None);
    }

    #[test]
    fn select_rows_and_head_keep_layout() {
        let t = sample();
        let sub = t.select_rows(&[2, 0]);
        assert_eq!(sub.column_names(), t.column_names());
        assert_eq!(sub.column(0), &[text("C"), text("A")]);
        assert_eq!(t.head(2).len(), 2);
        assert_eq!(t.head(10).len(), 3);
    }

    #[test]
    fn distinct_values_skip_missing() {
        let t = sample();
        let distinct: Vec<_> = t.distinct_values(1).into_iter().collect();
        assert_eq!(distinct, vec![text("early"), text("late")]);
    }

    #[test]
    fn with_column_leaves_original_untouched() {
        let t = sample();
        let derived = t.with_column(0, vec![CellValue::Missing; 3]);
        assert!(derived.cell(1, 0).is_missing());
        assert_eq!(t.cell(1, 0), &text("B"));
    }
}
