//! infrepo-core - Data model, badging parser and configuration
//!
//! This crate provides the foundational types for building an update repository:
//! - [`BadgingParser`] for turning a badging dump into [`BadgingInfo`]
//! - [`DumpTool`] for invoking the external badging-dump utility
//! - [`PackageRecord`] for one manifest row
//! - [`RepoConfig`] for repository configuration
//! - [`RepoError`] for error handling

mod badging;
mod config;
mod dump;
mod error;
mod preflight;
mod record;
mod scan;

pub use badging::{BadgingInfo, BadgingParser, DEFAULT_ICON_DENSITY};
pub use config::RepoConfig;
pub use dump::{AaptDumpTool, DumpOutput, DumpTool};
pub use error::{RepoError, RepoResult};
pub use preflight::preflight;
pub use record::{MANIFEST_HEADER, PackageFacts, PackageRecord};
pub use scan::files_with_extension;

/// Manifest file name, both in the working directory and inside the bundle.
pub const MANIFEST_FILE: &str = "product.inf";

/// Bundle file name written to the working directory.
pub const BUNDLE_FILE: &str = "product.infz";

/// Extension of extracted icon images.
pub const ICON_EXTENSION: &str = "png";

/// Log levels accepted by the configuration and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Parse a level name, ignoring case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BadgingInfo, BadgingParser, DumpOutput, DumpTool, LogLevel, PackageRecord, RepoConfig,
        RepoError, RepoResult,
    };
}
