use std::path::Path;

use crate::animation::AnimationState;
use crate::color::ColorMap;
use crate::data::filter::StatusFilter;
use crate::data::loader;
use crate::data::mapper::{Role, RoleAssignment};
use crate::data::model::Table;
use crate::data::pipeline::{DashboardView, ViewRequest, render_view};
use crate::error::MappingError;

// ---------------------------------------------------------------------------
// File notice
// ---------------------------------------------------------------------------

/// Message about the current upload shown above the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

impl Default for Notice {
    fn default() -> Self {
        Notice::Info("Upload a CSV file to get started.".to_string())
    }
}

/// The uploaded table and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub name: String,
    pub table: Table,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state of one session, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None until the user uploads a file).
    pub file: Option<LoadedFile>,

    /// Column chosen for each role.
    pub roles: Option<RoleAssignment>,

    /// Status filter selection.
    pub filter: StatusFilter,

    /// Derived outputs for the current request (cached between frames).
    pub view: Option<Result<DashboardView, MappingError>>,

    /// Colours of the chart's status series.
    pub color_map: Option<ColorMap>,

    pub notice: Notice,

    pub animation: AnimationState,
}

impl AppState {
    pub fn with_animation(animation: AnimationState) -> Self {
        Self {
            animation,
            ..Self::default()
        }
    }

    /// Parse uploaded bytes. On failure the previous table is discarded so no
    /// stale results are shown.
    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) {
        match loader::load_csv_bytes(bytes) {
            Ok(table) => {
                log::info!(
                    "Loaded '{name}': {} rows, columns {:?}",
                    table.len(),
                    table.column_names()
                );
                self.set_table(name, table);
            }
            Err(e) => self.fail_load(name, &e),
        }
    }

    /// Read and parse a file from disk.
    pub fn load_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match loader::load_file(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {}: {} rows, columns {:?}",
                    path.display(),
                    table.len(),
                    table.column_names()
                );
                self.set_table(&name, table);
            }
            Err(e) => self.fail_load(&name, &e),
        }
    }

    fn set_table(&mut self, name: &str, table: Table) {
        self.roles = RoleAssignment::guess(table.column_names());
        self.filter = StatusFilter::All;
        self.file = Some(LoadedFile {
            name: name.to_string(),
            table,
        });
        self.notice = Notice::Success("File uploaded successfully.".to_string());
        self.recompute();
    }

    fn fail_load(&mut self, name: &str, err: &anyhow::Error) {
        log::error!("Failed to load {name}: {err:#}");
        self.file = None;
        self.roles = None;
        self.filter = StatusFilter::All;
        self.view = None;
        self.color_map = None;
        self.notice = Notice::Error(format!("Failed to process file: {err:#}"));
    }

    /// Change the column used for a role. Changing the status column resets
    /// the filter since its choices change.
    pub fn set_role(&mut self, role: Role, column: String) {
        let Some(roles) = &mut self.roles else {
            return;
        };
        if roles.get(role) == column {
            return;
        }
        roles.set(role, column);
        if role == Role::Status {
            self.filter = StatusFilter::All;
        }
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.recompute();
        }
    }

    /// The request for the current widget selections.
    pub fn request(&self) -> Option<ViewRequest> {
        self.roles.as_ref().map(|roles| ViewRequest {
            roles: roles.clone(),
            filter: self.filter.clone(),
        })
    }

    /// Re-run the pipeline for the current request.
    pub fn recompute(&mut self) {
        let view = match (&self.file, self.request()) {
            (Some(file), Some(request)) => Some(render_view(&file.table, &request)),
            _ => None,
        };
        if let Some(Err(e)) = &view {
            log::warn!("{e}");
        }
        self.color_map = match &view {
            Some(Ok(v)) => Some(ColorMap::new(&v.chart.series_labels())),
            _ => None,
        };
        self.view = view;
    }

    /// Rows passing the current filter, when a view exists.
    pub fn visible_rows(&self) -> Option<usize> {
        match &self.view {
            Some(Ok(view)) => Some(view.normalized.len()),
            _ => None,
        }
    }
}
