use std::path::Path;

use eframe::egui;
use sensor_chart::app::SensorChartApp;
use sensor_chart::state::settings::{AppSettings, SETTINGS_FILE};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::load_or_default(Path::new(SETTINGS_FILE));
    tracing::info!("Starting sensor chart for {:?}", settings.series_id);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sensor Chart")
            .with_inner_size([settings.width + 160.0, settings.height + 220.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sensor Chart",
        options,
        Box::new(|cc| Ok(Box::new(SensorChartApp::new(cc, settings)))),
    )
}
