use tracing_subscriber::EnvFilter;
use crate::config::LogFormat;

/// Installs the global subscriber. Call once, before anything logs.
///
/// An invalid filter falls back to `info` rather than aborting startup.
pub fn setup_tracing(filter: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
