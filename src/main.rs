//! Hover Button - Demo Entry Point
//!
//! Usage: `hover-button [CONFIG]` where CONFIG is a `.toml` or `.json` file.
//! Without an argument the platform config directory is used.

use std::path::PathBuf;

use hover_button::app::application::run_app;
use hover_button::utils::config_store::load_or_default;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Hover Button demo...");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_or_default(config_path.as_deref());
    tracing::debug!(?config, "effective config");

    run_app(config);
}
