mod app;
mod color;
mod config;
mod state;
mod ui;

use app::FishPredictorApp;
use clap::Parser;
use config::{AppConfig, Args};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from(Args::parse());
    log::info!(
        "Starting with {} layout, artifacts in {}",
        config.layout,
        config.artifact_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fish Species Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(FishPredictorApp::new(config)))),
    )
}
