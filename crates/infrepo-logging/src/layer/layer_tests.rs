#![allow(non_snake_case)]

use super::*;
use tracing::Level;
use tracing_subscriber::{Layer, Registry};

fn hint(filter: &EnvFilter) -> Option<LevelFilter> {
    <EnvFilter as Layer<Registry>>::max_level_hint(filter)
}

#[test]
fn level_filter___maps_every_level() {
    assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
    assert_eq!(level_filter(LogLevel::Debug), LevelFilter::DEBUG);
    assert_eq!(level_filter(LogLevel::Info), LevelFilter::INFO);
    assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
    assert_eq!(level_filter(LogLevel::Error), LevelFilter::ERROR);
    assert_eq!(level_filter(LogLevel::Off), LevelFilter::OFF);
}

#[test]
fn build_filter___no_directives___uses_level() {
    let filter = build_filter(LogLevel::Warn, None);

    assert_eq!(hint(&filter), Some(LevelFilter::WARN));
}

#[test]
fn build_filter___blank_directives___uses_level() {
    let filter = build_filter(LogLevel::Debug, Some("  "));

    assert_eq!(hint(&filter), Some(LevelFilter::DEBUG));
}

#[test]
fn build_filter___directives___override_level() {
    let filter = build_filter(LogLevel::Error, Some("trace"));

    assert_eq!(hint(&filter), Some(LevelFilter::TRACE));
}

#[test]
fn init_logging___called_twice___does_not_panic() {
    init_logging(LogLevel::Info);
    init_logging(LogLevel::Debug);

    tracing::event!(Level::INFO, "still logging");
}
