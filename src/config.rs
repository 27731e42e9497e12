use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

/// Runtime settings. Every flag can also come from the environment.
#[derive(Clone, Debug, Parser)]
#[command(name = "coffee_shop", version, about = "Coffee catalog and order service")]
pub struct AppConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "COFFEE_SHOP_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Log filter, in `tracing_subscriber::EnvFilter` syntax
    #[arg(long, env = "COFFEE_SHOP_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "COFFEE_SHOP_LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    /// JSON file replacing the built-in sample catalog
    #[arg(long, env = "COFFEE_SHOP_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Request queue length of each store actor
    #[arg(
        long,
        env = "COFFEE_SHOP_CHANNEL_CAPACITY",
        default_value_t = 32,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub channel_capacity: u16,
}

impl AppConfig {
    pub fn channel_capacity(&self) -> usize {
        usize::from(self.channel_capacity)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadCatalog { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseCatalog { path: PathBuf, source: serde_json::Error },
    #[error("catalog validation failed: {0}")]
    Validation(String),
}
