//! wilayah - main entry point.
//!
//! Initializes logging and configuration, creates the HTTP directory
//! client, and runs the terminal event loop on top of a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use wilayah_client::HttpDirectory;
use wilayah_core::AppConfig;
use wilayah_ui::app;
use wilayah_ui::model::Browser;

fn main() {
    // Initialize logging. Stderr keeps the alternate screen intact.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration, degrading gracefully to defaults.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config: {} - using defaults", e);
            AppConfig::default()
        }
    };
    tracing::info!(base_url = %config.api.base_url, "wilayah starting");

    // The event loop runs on the main thread; the runtime's workers drive
    // the spawned fetches.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    let _guard = rt.enter();

    let directory = Arc::new(HttpDirectory::new(config.api.base_url.clone()));
    let (browser, outcomes) = Browser::new(directory);

    if let Err(e) = app::run(browser, outcomes, Duration::from_millis(config.ui.tick_ms)) {
        tracing::error!("Terminal error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
