use super::alert::{self, Alert};
use super::chart::{ChartData, build_chart};
use super::filter::{StatusFilter, filter_rows, status_choices};
use super::mapper::{PREVIEW_ROWS, RoleAssignment, preview};
use super::model::{CellValue, Table};
use super::normalize::normalize_risk;
use crate::error::MappingError;

/// Everything the user currently selected, captured once per interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    pub roles: RoleAssignment,
    pub filter: StatusFilter,
}

/// Every derived output shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Mapped columns of the loaded table, first rows only.
    pub preview: Table,
    /// Filter options besides "All".
    pub status_choices: Vec<CellValue>,
    /// Filtered rows with a numeric risk column.
    pub normalized: Table,
    pub chart: ChartData,
    pub alert: Alert,
}

/// Recompute the whole dashboard from the loaded table and the request.
pub fn render_view(table: &Table, request: &ViewRequest) -> Result<DashboardView, MappingError> {
    let roles = request.roles.resolve(table)?;
    if request.roles.has_shared_columns() {
        log::debug!("column shared between roles: {:?}", request.roles);
    }

    let preview = preview(table, &request.roles, &roles, PREVIEW_ROWS);
    let status_choices = status_choices(table, roles.status);
    let filtered = filter_rows(table, roles.status, &request.filter);
    let normalized = normalize_risk(&filtered, roles.risk);
    let chart = build_chart(&normalized, &roles, &request.roles);
    let alert = alert::evaluate(&normalized, &roles);

    Ok(DashboardView {
        preview,
        status_choices,
        normalized,
        chart,
        alert,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_bytes;
    use crate::data::mapper::Role;

    const JOBS: &[u8] = b"id,status,risk\nA,late,0.9\nB,ontime,0.2\nC,late,abc\n";

    fn request(filter: StatusFilter) -> ViewRequest {
        ViewRequest {
            roles: RoleAssignment {
                job_id: "id".into(),
                status: "status".into(),
                risk: "risk".into(),
            },
            filter,
        }
    }

    #[test]
    fn all_filter_flags_job_a() {
        let table = load_csv_bytes(JOBS).unwrap();
        let view = render_view(&table, &request(StatusFilter::All)).unwrap();

        assert_eq!(
            view.normalized.column(2),
            &[
                CellValue::Number(0.9),
                CellValue::Number(0.2),
                CellValue::Missing
            ]
        );
        assert_eq!(view.alert, Alert::HighRisk(vec!["A".into()]));
        assert!(view.alert.message().contains('A'));
        assert_eq!(view.preview.column_names(), &["id", "status", "risk"]);
        assert_eq!(view.preview.len(), 3);
        assert_eq!(
            view.status_choices,
            vec![
                CellValue::Text("late".into()),
                CellValue::Text("ontime".into())
            ]
        );
    }

    #[test]
    fn ontime_filter_is_clear() {
        let table = load_csv_bytes(JOBS).unwrap();
        let view = render_view(
            &table,
            &request(StatusFilter::Only(CellValue::Text("ontime".into()))),
        )
        .unwrap();

        assert_eq!(view.normalized.len(), 1);
        assert_eq!(view.normalized.cell(0, 0), &CellValue::Text("B".into()));
        assert_eq!(view.alert, Alert::Clear);
        assert_eq!(view.alert.message(), "No high-risk jobs found.");
        // preview and choices come from the unfiltered table
        assert_eq!(view.preview.len(), 3);
        assert_eq!(view.status_choices.len(), 2);
    }

    #[test]
    fn unknown_column_fails_fast() {
        let table = load_csv_bytes(JOBS).unwrap();
        let mut req = request(StatusFilter::All);
        req.roles.set(Role::Risk, "score".into());
        let err = render_view(&table, &req).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownColumn {
                role: Role::Risk,
                column: "score".into()
            }
        );
    }

    #[test]
    fn shared_status_and_risk_column_does_not_crash() {
        let table = load_csv_bytes(JOBS).unwrap();
        let mut req = request(StatusFilter::All);
        req.roles.set(Role::Risk, "status".into());
        let view = render_view(&table, &req).unwrap();
        assert_eq!(view.alert, Alert::Clear);
        assert!(view.chart.is_empty());
    }
}
