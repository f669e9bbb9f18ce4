use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::ColorMap;
use crate::data::chart::ChartData;

const BAR_WIDTH: f64 = 0.7;

// ---------------------------------------------------------------------------
// Risk-by-job bar chart
// ---------------------------------------------------------------------------

/// Render the bar chart: one `BarChart` per status, job categories on x.
pub fn risk_chart(ui: &mut Ui, chart: &ChartData, color_map: Option<&ColorMap>) {
    ui.label(RichText::new(chart.title.as_str()).strong());

    if chart.is_empty() {
        ui.label(RichText::new("No numeric risk values to chart.").weak());
        return;
    }

    let bar_charts: Vec<BarChart> = chart
        .series
        .iter()
        .map(|series| {
            let color = color_map
                .map(|cm| cm.color_for(&series.label))
                .unwrap_or(Color32::LIGHT_BLUE);

            let bars: Vec<Bar> = series
                .bars
                .iter()
                .map(|b| {
                    Bar::new(b.category as f64, b.value)
                        .base_offset(b.base)
                        .width(BAR_WIDTH)
                        .name(&chart.categories[b.category])
                        .fill(color)
                })
                .collect();

            BarChart::new(bars)
                .name(format!("{} = {}", chart.legend_title, series.label))
                .color(color)
        })
        .collect();

    // Category labels on integer ticks only.
    let categories = chart.categories.clone();

    Plot::new("risk_chart")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .x_axis_formatter(move |mark, _range| {
            let v = mark.value;
            if v >= 0.0 && (v - v.round()).abs() < 1e-9 {
                categories.get(v.round() as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .height(360.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for bar_chart in bar_charts {
                plot_ui.bar_chart(bar_chart);
            }
        });
}
