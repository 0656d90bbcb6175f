//! GUI entry point for Car Price

mod app;
mod predict_panel;
mod settings_panel;

use app::CarPriceApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Price Prediction",
        options,
        Box::new(|cc| Ok(Box::new(CarPriceApp::new(cc)))),
    )
}
