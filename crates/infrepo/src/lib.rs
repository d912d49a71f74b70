//! # infrepo
//!
//! Builds the `product.inf` manifest and `product.infz` bundle served to
//! devices as a plugin update repository.
//!
//! For every package in the working directory (sorted by name) the
//! generator asks a [`DumpTool`] for the badging dump, parses it, extracts
//! the icon, hashes the file and appends one manifest line. Finally the
//! manifest and all icons in the directory are zipped together.
//!
//! ## Example
//!
//! ```no_run
//! use infrepo::prelude::*;
//!
//! let config = RepoConfig::new("/opt/android/build-tools/33.0.2/aapt", "/srv/update");
//! let tool = AaptDumpTool::new(&config.dump_tool);
//! let summary = RepoGenerator::new(config, tool).run()?;
//! println!("{} packages", summary.packages);
//! # Ok::<(), infrepo::GenerateError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`infrepo_core`] - Configuration, badging parser, records
//! - [`infrepo_bundle`] - Hashing, icons, manifest writer, bundle

mod error;
mod generator;

pub use error::{GenerateError, GenerateResult};
pub use generator::{RepoGenerator, RunSummary};

pub use infrepo_bundle::{
    BundleBuilder, BundleError, BundleLoader, BundleResult, IconOutcome, ManifestWriter,
    build_repo_bundle, compute_sha256, extract_icon, sha256_file,
};
pub use infrepo_core::{
    AaptDumpTool, BUNDLE_FILE, BadgingInfo, BadgingParser, DumpOutput, DumpTool, ICON_EXTENSION,
    LogLevel, MANIFEST_FILE, MANIFEST_HEADER, PackageFacts, PackageRecord, RepoConfig, RepoError,
    RepoResult, files_with_extension, preflight,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AaptDumpTool, DumpOutput, DumpTool, GenerateError, GenerateResult, RepoConfig,
        RepoGenerator, RunSummary,
    };
}
