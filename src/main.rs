mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchDashApp;
use eframe::egui;
use state::AppState;

/// Fixed dataset location, resolved against the working directory.
const DATA_PATH: &str = "launch_records.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Single-shot tool: a missing or malformed dataset is fatal, before any
    // window opens.
    let dataset = match data::loader::load_file(Path::new(DATA_PATH)) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {DATA_PATH}: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launch records, payload {:.0}..{:.0} kg",
        dataset.len(),
        dataset.min_payload,
        dataset.max_payload
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(AppState::new(dataset))))),
    )
}
