//! infrepo-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a console subscriber at a [`LogLevel`]
//! - [`level_filter`] to map a [`LogLevel`] onto a tracing filter

mod layer;

pub use infrepo_core::LogLevel;
pub use layer::{build_filter, init_logging, level_filter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, init_logging};
}
