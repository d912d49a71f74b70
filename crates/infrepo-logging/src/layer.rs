//! Console subscriber installation

use infrepo_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable that overrides the configured level
pub const LOG_ENV: &str = "RUST_LOG";

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Build the filter for `level`, letting `directives` (usually `RUST_LOG`) win
pub fn build_filter(level: LogLevel, directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(level_filter(level).into());
    match directives {
        Some(directives) if !directives.trim().is_empty() => builder.parse_lossy(directives),
        _ => builder.parse_lossy(""),
    }
}

/// Initialize console logging at `level`
///
/// Events go to stderr without timestamps or targets, which reads like
/// progress output. Calling this more than once keeps the first subscriber.
pub fn init_logging(level: LogLevel) {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(level, directives.as_deref());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
