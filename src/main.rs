mod domain;
mod clients;

mod api;
mod app_system;
mod config;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod coffee_actor;
mod order_actor;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use crate::api::AppState;
use crate::app_system::{load_catalog, sample_coffees, sample_orders, setup_tracing, CoffeeShop};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level, config.log_format);

    info!(bind = %config.bind, "Starting coffee shop");

    let coffees = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => sample_coffees(),
    };
    let orders = sample_orders().context("sample order history is malformed")?;

    // Start the store actors and hand their clients to the router
    let system = CoffeeShop::start(coffees, orders, config.channel_capacity())?;
    let app = api::router(AppState {
        coffees: system.coffee_client.clone(),
        orders: system.order_client.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("could not bind {}", config.bind))?;
    info!(address = %config.bind, "HTTP server listening");

    axum::serve(listener, app).with_graceful_shutdown(wait_for_shutdown()).await?;

    // Router (and its client clones) is gone; actors can now drain
    system.shutdown().await?;

    info!("Coffee shop stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for ctrl-c; shutting down");
    }
}
