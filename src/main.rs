// src/main.rs
use eframe::egui;
use anyhow::Result;

mod api;
mod app;
mod config;
mod state;
mod ui;

use app::ExtractorApp;

fn main() -> Result<()> {
    env_logger::init();

    let config = config::AppConfig::load()?;
    log::info!("using extraction service at {}", config.api_base);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("Function Extractor"),
        ..Default::default()
    };

    eframe::run_native(
        "Function Extractor",
        options,
        Box::new(move |cc| Box::new(ExtractorApp::new(cc, config))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
