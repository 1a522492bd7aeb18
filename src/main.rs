mod app;
mod charts;
mod color;
mod data;
mod export;
mod state;
mod ui;

use std::path::PathBuf;

use app::FireDashApp;
use eframe::egui;

/// File written by `generate_sample` and read here by default; the first
/// command-line argument overrides it.
const DEFAULT_DATASET: &str = "wildlife_fire_project.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_DATASET.to_string()),
    );

    // The dataset is loaded once, before the UI starts; a missing file or a
    // missing required column is fatal here rather than a per-chart failure.
    let dataset = match data::loader::load_csv(&path) {
        Ok(ds) => {
            log::info!("Loaded {} fire records from {}", ds.len(), path.display());
            ds
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fire Dash – Wildfire Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(FireDashApp::new(dataset)))),
    )
}
