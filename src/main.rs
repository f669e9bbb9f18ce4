mod animation;
mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use animation::AnimationState;
use app::JobRiskApp;
use clap::Parser;
use config::Cli;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let animation = if cli.no_animation {
        AnimationState::Disabled
    } else {
        animation::load_animation(&cli.animation_url, cli.http_timeout())
    };

    let mut state = AppState::with_animation(animation);
    if let Some(path) = &cli.file {
        state.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Universal Job Risk Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(JobRiskApp::new(state)))),
    )
}
