use super::mapper::{ResolvedRoles, RoleAssignment};
use super::model::Table;

pub const CHART_TITLE: &str = "Delay Risk by Job";

/// Legend label for rows without a status.
pub const MISSING_STATUS_LABEL: &str = "(missing)";

// ---------------------------------------------------------------------------
// Chart description (independent of the plotting backend)
// ---------------------------------------------------------------------------

/// One bar: a single row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Index into [`ChartData::categories`].
    pub category: usize,
    pub value: f64,
    /// Where the bar starts; non-zero when several rows share a job.
    pub base: f64,
}

/// All bars sharing one status value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: String,
    pub bars: Vec<BarSpec>,
}

/// Bar chart of risk by job, grouped by status.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Job labels in order of first appearance.
    pub categories: Vec<String>,
    /// One series per status, in order of first appearance.
    pub series: Vec<BarSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.bars.is_empty())
    }

    pub fn series_labels(&self) -> Vec<String> {
        self.series.iter().map(|s| s.label.clone()).collect()
    }
}

/// Describe the bar chart for a normalized table.
///
/// Rows with a missing risk or a missing job id are left out. Bars of the
/// same job stack in row order: positive values upwards from zero, negative
/// values downwards.
pub fn build_chart(table: &Table, roles: &ResolvedRoles, names: &RoleAssignment) -> ChartData {
    let mut categories: Vec<String> = Vec::new();
    let mut series: Vec<BarSeries> = Vec::new();
    // running (positive, negative) stack height per category
    let mut stacks: Vec<(f64, f64)> = Vec::new();

    for row in 0..table.len() {
        let Some(value) = table.cell(row, roles.risk).as_f64() else {
            continue;
        };
        let Some(job) = table.cell(row, roles.job_id).label() else {
            continue;
        };
        let status = table
            .cell(row, roles.status)
            .label()
            .unwrap_or_else(|| MISSING_STATUS_LABEL.to_string());

        let category = match categories.iter().position(|c| *c == job) {
            Some(i) => i,
            None => {
                categories.push(job);
                stacks.push((0.0, 0.0));
                categories.len() - 1
            }
        };

        let (positive, negative) = &mut stacks[category];
        let base = if value >= 0.0 {
            let base = *positive;
            *positive += value;
            base
        } else {
            let base = *negative;
            *negative += value;
            base
        };

        let series_idx = match series.iter().position(|s| s.label == status) {
            Some(i) => i,
            None => {
                series.push(BarSeries {
                    label: status,
                    bars: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[series_idx].bars.push(BarSpec {
            category,
            value,
            base,
        });
    }

    ChartData {
        title: CHART_TITLE.to_string(),
        x_label: names.job_id.clone(),
        y_label: names.risk.clone(),
        legend_title: names.status.clone(),
        categories,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_bytes;
    use crate::data::normalize::normalize_risk;

    fn chart_for(csv: &[u8]) -> ChartData {
        let table = load_csv_bytes(csv).unwrap();
        let names = RoleAssignment {
            job_id: "id".into(),
            status: "status".into(),
            risk: "risk".into(),
        };
        let roles = names.resolve(&table).unwrap();
        let normalized = normalize_risk(&table, roles.risk);
        build_chart(&normalized, &roles, &names)
    }

    #[test]
    fn groups_by_status_in_first_appearance_order() {
        let chart = chart_for(b"id,status,risk\nA,late,0.9\nB,ontime,0.2\nC,late,abc\n");

        assert_eq!(chart.title, CHART_TITLE);
        assert_eq!(chart.x_label, "id");
        assert_eq!(chart.y_label, "risk");
        assert_eq!(chart.legend_title, "status");
        // C has no numeric risk and is dropped
        assert_eq!(chart.categories, vec!["A", "B"]);
        assert_eq!(chart.series_labels(), vec!["late", "ontime"]);
        assert_eq!(
            chart.series[0].bars,
            vec![BarSpec {
                category: 0,
                value: 0.9,
                base: 0.0
            }]
        );
        assert_eq!(chart.series[1].bars[0].category, 1);
    }

    #[test]
    fn repeated_jobs_stack() {
        let chart = chart_for(b"id,status,risk\nA,late,0.5\nA,ontime,0.25\nA,late,-0.5\n");
        assert_eq!(chart.categories, vec!["A"]);
        let late = &chart.series[0].bars;
        let ontime = &chart.series[1].bars;
        assert_eq!(late[0].base, 0.0);
        assert_eq!(ontime[0].base, 0.5);
        assert_eq!(late[1].base, 0.0);
        assert_eq!(late[1].value, -0.5);
    }

    #[test]
    fn missing_status_gets_its_own_series_and_missing_id_is_dropped() {
        let chart = chart_for(b"id,status,risk\nA,,0.4\n,late,0.8\n");
        assert_eq!(chart.categories, vec!["A"]);
        assert_eq!(chart.series_labels(), vec![MISSING_STATUS_LABEL]);
    }

    #[test]
    fn empty_when_no_numeric_risk() {
        let chart = chart_for(b"id,status,risk\nA,late,x\n");
        assert!(chart.is_empty());
        assert!(chart.categories.is_empty());
    }
}
