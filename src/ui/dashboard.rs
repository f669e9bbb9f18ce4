use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::animation::AnimationState;
use crate::data::alert::{Alert, RISK_THRESHOLD};
use crate::data::model::Table;
use crate::state::{AppState, Notice};
use crate::ui::plot;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(60, 170, 90);

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the dashboard body: header, preview, chart, insights and alert.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Job Risk Dashboard");
            animation_banner(ui, &state.animation);
            ui.separator();

            notice(ui, &state.notice);

            let view = match &state.view {
                Some(Ok(view)) => view,
                Some(Err(e)) => {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        format!("✖ Failed to process file: {e}"),
                    );
                    return;
                }
                None => return,
            };

            ui.add_space(8.0);
            ui.heading("Data Preview");
            preview_table(ui, &view.preview);

            ui.add_space(12.0);
            ui.heading("Risk by Job");
            if view.normalized.is_empty() {
                ui.label(RichText::new("No rows match the selected status.").weak());
            }
            plot::risk_chart(ui, &view.chart, state.color_map.as_ref());

            ui.add_space(12.0);
            ui.heading("Predictive Insights");
            ui.label(format!(
                "• Jobs above {RISK_THRESHOLD} risk score flagged for proactive attention."
            ));
            ui.label("• ML-ready format with adaptable schema.");

            ui.add_space(8.0);
            alert_label(ui, &view.alert);
        });
}

fn notice(ui: &mut Ui, notice: &Notice) {
    match notice {
        Notice::Info(msg) => {
            ui.label(RichText::new(format!("ℹ {msg}")).weak());
        }
        Notice::Success(msg) => {
            ui.colored_label(SUCCESS_COLOR, format!("✔ {msg}"));
        }
        Notice::Error(msg) => {
            ui.colored_label(ui.visuals().error_fg_color, format!("✖ {msg}"));
        }
    }
}

fn alert_label(ui: &mut Ui, alert: &Alert) {
    if alert.is_warning() {
        ui.colored_label(ui.visuals().warn_fg_color, format!("⚠ {}", alert.message()));
    } else {
        ui.colored_label(SUCCESS_COLOR, format!("✔ {}", alert.message()));
    }
}

// ---------------------------------------------------------------------------
// Header animation
// ---------------------------------------------------------------------------

fn animation_banner(ui: &mut Ui, animation: &AnimationState) {
    match animation {
        AnimationState::Ready(anim) => {
            let progress = anim.progress_at(ui.input(|i| i.time));
            ui.horizontal(|ui: &mut Ui| {
                ui.add(egui::Spinner::new());
                ui.label(format!(
                    "{}  ·  Lottie {}  ·  {}×{}  ·  {} layers",
                    anim.display_name(),
                    anim.version,
                    anim.width,
                    anim.height,
                    anim.layers.len()
                ));
            });
            ui.add(egui::ProgressBar::new(progress).desired_width(240.0));
            ui.ctx().request_repaint();
        }
        AnimationState::Unavailable(_) => {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "⚠ Could not load Lottie animation.",
            );
        }
        AnimationState::Disabled => {}
    }
}

// ---------------------------------------------------------------------------
// Preview table
// ---------------------------------------------------------------------------

fn preview_table(ui: &mut Ui, preview: &Table) {
    let n_cols = preview.n_columns();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(90.0), n_cols)
        .header(20.0, |mut header| {
            for name in preview.column_names() {
                header.col(|ui: &mut Ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|mut body| {
            for row in 0..preview.len() {
                body.row(18.0, |mut table_row| {
                    for col in 0..n_cols {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(preview.cell(row, col).to_string());
                        });
                    }
                });
            }
        });
}
