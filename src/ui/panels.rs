use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::StatusFilter;
use crate::data::mapper::Role;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – upload, column mapping, status filter
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Upload CSV");
    ui.separator();

    if ui.button("Upload any CSV file…").clicked() {
        open_file_dialog(state);
    }
    ui.small("or drop a .csv file onto the window");

    let (columns, roles) = match (&state.file, &state.roles) {
        (Some(file), Some(roles)) => {
            ui.label(format!("{} ({} rows)", file.name, file.table.len()));
            (file.table.column_names().to_vec(), roles.clone())
        }
        _ => return,
    };

    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Column role selectors ----
            ui.heading("Map Columns");
            ui.separator();

            for role in Role::ALL {
                let current = roles.get(role).to_string();
                ui.strong(format!("Select {role} column"));
                egui::ComboBox::from_id_salt(("role", role))
                    .selected_text(&current)
                    .show_ui(ui, |ui: &mut Ui| {
                        for col in &columns {
                            if ui.selectable_label(current == *col, col.as_str()).clicked() {
                                state.set_role(role, col.clone());
                            }
                        }
                    });
                ui.add_space(4.0);
            }

            ui.add_space(8.0);

            // ---- Status filter ----
            ui.heading("Filter by Status");
            ui.separator();

            let choices = match &state.view {
                Some(Ok(view)) => view.status_choices.clone(),
                _ => Vec::new(),
            };
            let current = state.filter.clone();
            egui::ComboBox::from_id_salt("status_filter")
                .selected_text(current.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    let options = std::iter::once(StatusFilter::All)
                        .chain(choices.into_iter().map(StatusFilter::Only));
                    for option in options {
                        if ui
                            .selectable_label(current == option, option.to_string())
                            .clicked()
                        {
                            state.set_filter(option);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(file) = &state.file {
            let visible = state
                .visible_rows()
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            ui.label(format!(
                "{}: {} rows loaded, {} visible",
                file.name,
                file.table.len(),
                visible
            ));
        } else {
            ui.label(RichText::new("No file loaded").weak());
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
