// src/main.rs

mod abb;
mod assistant;
mod cli;
mod config;
mod error;
mod sensor;

use anyhow::Context;
use assistant::{Assistant, OpenAiBackend};
use cli::dispatch::{Dispatcher, Registry};
use reqwest::Client;
use tracing::{error, info};

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

#[tokio::main]
async fn main() -> error::Result<()> {
    init_logging();

    info!("Starting Automation Helper CLI...");

    // Reads .env before the environment
    let config = config::Config::load();

    let client = Client::builder()
        .timeout(config.request_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let registry = Registry::new();
    let library = abb::Library::new();
    let assistant = Assistant::new(OpenAiBackend::new(client, &config), config.openai_api_key.clone());
    let dispatcher = Dispatcher::new(&registry, &library, &assistant);

    if let Err(e) = cli::repl::run_interactive(dispatcher, &library).await {
        error!("Application error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
