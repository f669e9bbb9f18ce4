use std::fmt;

use super::model::Table;
use crate::error::MappingError;

/// Rows shown in the data preview.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Semantic meaning the user assigns to an arbitrary column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    JobId,
    Status,
    Risk,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::JobId, Role::Status, Role::Risk];

    /// Lowercase name fragments used to pick a sensible initial column.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Role::JobId => &["job", "id"],
            Role::Status => &["status", "state"],
            Role::Risk => &["risk", "score"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::JobId => write!(f, "Job ID"),
            Role::Status => write!(f, "Status"),
            Role::Risk => write!(f, "Risk Score"),
        }
    }
}

// ---------------------------------------------------------------------------
// Role assignment
// ---------------------------------------------------------------------------

/// Column names chosen for each role. The same name may serve several roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub job_id: String,
    pub status: String,
    pub risk: String,
}

/// Role assignment resolved to column indices of a specific table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoles {
    pub job_id: usize,
    pub status: usize,
    pub risk: usize,
}

impl RoleAssignment {
    /// Initial selection for a freshly loaded header: the first column whose
    /// name mentions the role, otherwise the first column.
    /// `None` when there are no columns at all.
    pub fn guess(columns: &[String]) -> Option<Self> {
        let first = columns.first()?;
        let pick = |role: Role| {
            columns
                .iter()
                .find(|c| {
                    let lower = c.to_lowercase();
                    role.keywords().iter().any(|k| lower.contains(k))
                })
                .unwrap_or(first)
                .clone()
        };
        Some(RoleAssignment {
            job_id: pick(Role::JobId),
            status: pick(Role::Status),
            risk: pick(Role::Risk),
        })
    }

    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::JobId => &self.job_id,
            Role::Status => &self.status,
            Role::Risk => &self.risk,
        }
    }

    pub fn set(&mut self, role: Role, column: String) {
        match role {
            Role::JobId => self.job_id = column,
            Role::Status => self.status = column,
            Role::Risk => self.risk = column,
        }
    }

    /// Whether one column was picked for more than one role.
    pub fn has_shared_columns(&self) -> bool {
        self.job_id == self.status || self.job_id == self.risk || self.status == self.risk
    }

    /// Resolve the names against `table`, failing on the first unknown one.
    pub fn resolve(&self, table: &Table) -> Result<ResolvedRoles, MappingError> {
        let index = |role: Role| {
            let column = self.get(role);
            table
                .column_index(column)
                .ok_or_else(|| MappingError::UnknownColumn {
                    role,
                    column: column.to_string(),
                })
        };
        Ok(ResolvedRoles {
            job_id: index(Role::JobId)?,
            status: index(Role::Status)?,
            risk: index(Role::Risk)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// The three mapped columns, in role order, for at most the first `n` rows.
pub fn preview(table: &Table, names: &RoleAssignment, roles: &ResolvedRoles, n: usize) -> Table {
    let head = table.head(n);
    let column_names = Role::ALL
        .iter()
        .map(|&r| names.get(r).to_string())
        .collect();
    let columns = [roles.job_id, roles.status, roles.risk]
        .iter()
        .map(|&idx| head.column(idx).to_vec())
        .collect();
    Table::new(column_names, columns, head.len())
}
