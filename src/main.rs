//! SSG Dashboard - Seaport freight-rate dashboard & chart exporter
//!
//! Pick an origin and destination seaport, fetch the historical low/mean/high
//! rate series for the route, chart it and export the chart as a PNG.

use anyhow::Context;
use eframe::egui;
use ssg_dashboard::api::ApiClient;
use ssg_dashboard::config::ApiConfig;
use ssg_dashboard::gui::SsgApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ssg_dashboard=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ApiConfig::load().context("could not load API configuration")?;
    let client = ApiClient::new(config);

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 680.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("SSG Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SSG Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(SsgApp::new(cc, client)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
