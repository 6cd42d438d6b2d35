//! services/quote/src/bin/quote.rs

use clap::Parser;
use quote_lib::{
    adapters::FileSettingsAdapter,
    config::Config,
    error::QuoteError,
    quote::{run_quote, QuoteRequest},
};
use std::io::Write;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded.");

    // --- 2. Parse the Request ---
    let request = QuoteRequest::parse();

    // --- 3. Initialize the Settings Adapter ---
    let settings_source = FileSettingsAdapter::new(config.settings_dir.clone());
    info!(
        "Reading room settings from {}",
        settings_source.settings_dir().display()
    );

    // --- 4. Quote & Print ---
    let report = run_quote(&settings_source, &request, config.today()).await?;
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}
