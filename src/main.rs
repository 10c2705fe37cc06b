mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::CordExplorerApp;
use clap::Parser;
use config::Cli;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let mut state = AppState::new(cli.dashboard_config());
    if let Some(path) = &cli.path {
        state.open(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CORD Explorer – Research Paper Metadata",
        options,
        Box::new(|_cc| Ok(Box::new(CordExplorerApp::new(state)))),
    )
}
