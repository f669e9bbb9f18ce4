use super::mapper::ResolvedRoles;
use super::model::Table;

/// Risk scores strictly above this value are high risk.
pub const RISK_THRESHOLD: f64 = 0.7;

/// Outcome of the high-risk check for the current view.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Job ids above the threshold, in table row order. Never empty.
    HighRisk(Vec<String>),
    Clear,
}

impl Alert {
    pub fn from_jobs(jobs: Vec<String>) -> Self {
        if jobs.is_empty() {
            Alert::Clear
        } else {
            Alert::HighRisk(jobs)
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Alert::HighRisk(_))
    }

    pub fn message(&self) -> String {
        match self {
            Alert::HighRisk(jobs) => format!("Jobs at high risk: {}", jobs.join(", ")),
            Alert::Clear => "No high-risk jobs found.".to_string(),
        }
    }
}

/// Job ids whose numeric risk is strictly greater than `threshold`.
/// Rows with a missing risk or a missing job id are skipped.
pub fn high_risk_jobs(table: &Table, roles: &ResolvedRoles, threshold: f64) -> Vec<String> {
    (0..table.len())
        .filter(|&row| {
            table
                .cell(row, roles.risk)
                .as_f64()
                .is_some_and(|risk| risk > threshold)
        })
        .filter_map(|row| table.cell(row, roles.job_id).label())
        .collect()
}

/// Evaluate the fixed-threshold alert for a normalized table.
pub fn evaluate(table: &Table, roles: &ResolvedRoles) -> Alert {
    Alert::from_jobs(high_risk_jobs(table, roles, RISK_THRESHOLD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_bytes;
    use crate::data::normalize::normalize_risk;

    const ROLES: ResolvedRoles = ResolvedRoles {
        job_id: 0,
        status: 1,
        risk: 2,
    };

    fn alert_for(csv: &[u8]) -> Alert {
        let table = normalize_risk(&load_csv_bytes(csv).unwrap(), ROLES.risk);
        evaluate(&table, &ROLES)
    }

    #[test]
    fn threshold_is_exclusive() {
        let alert = alert_for(b"id,status,risk\nA,x,0.7\nB,x,0.71\nC,x,1\n");
        assert_eq!(alert, Alert::HighRisk(vec!["B".into(), "C".into()]));
        assert_eq!(alert.message(), "Jobs at high risk: B, C");
        assert!(alert.is_warning());
    }

    #[test]
    fn missing_risk_and_missing_id_are_excluded() {
        let alert = alert_for(b"id,status,risk\nA,x,abc\n,x,0.9\nD,x,0.95\n");
        assert_eq!(alert, Alert::HighRisk(vec!["D".into()]));
    }

    #[test]
    fn keeps_row_order_and_duplicates() {
        let alert = alert_for(b"id,status,risk\nZ,x,0.8\nA,x,0.9\nZ,x,0.99\n");
        assert_eq!(alert.message(), "Jobs at high risk: Z, A, Z");
    }

    #[test]
    fn clear_when_nothing_exceeds() {
        let alert = alert_for(b"id,status,risk\nB,ontime,0.2\n");
        assert_eq!(alert, Alert::Clear);
        assert_eq!(alert.message(), "No high-risk jobs found.");
        assert!(!alert.is_warning());
    }

    #[test]
    fn numeric_job_ids_are_labelled_plainly() {
        let alert = alert_for(b"id,status,risk\n101,x,0.9\n102,x,0.1\n");
        assert_eq!(alert, Alert::HighRisk(vec!["101".into()]));
    }
}
