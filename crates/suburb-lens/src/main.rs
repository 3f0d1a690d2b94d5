mod bootstrap;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use lens_core::settings::Settings;
use lens_data::client::{ListingSource, ListingsClient};
use lens_runtime::orchestrator::FetchOrchestrator;
use lens_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("suburb-lens v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Suburb: {}, Type: {}, Source: {}",
        settings.suburb,
        settings.property_type.as_deref().unwrap_or("any"),
        if settings.sample { "sample" } else { "api" }
    );

    let source = if settings.sample {
        ListingSource::Sample
    } else {
        let client = ListingsClient::new(Duration::from_secs(settings.timeout_secs))?;
        ListingSource::Api(client)
    };

    let (orchestrator, rx) = FetchOrchestrator::new(source, 16);

    let app = App::new(
        &settings.theme,
        settings.suburb.clone(),
        settings.property_type.clone(),
        orchestrator,
    );

    // Run the TUI event loop. The loop exits on Esc / Ctrl+C inside the TUI;
    // we also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run(rx) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down");
        }
    }

    Ok(())
}
