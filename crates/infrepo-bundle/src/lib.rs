//! Repository bundle format for infrepo
//!
//! This crate provides the file-producing half of repository generation:
//! streaming package hashes, icon extraction from package archives, the
//! `product.inf` manifest writer and the `product.infz` bundle.
//!
//! # Bundle Structure
//!
//! ```text
//! product.infz
//! ├── product.inf
//! ├── first-plugin.png
//! └── second-plugin.png
//! ```
//!
//! # Example
//!
//! ```no_run
//! use infrepo_bundle::BundleBuilder;
//!
//! BundleBuilder::new()
//!     .add_file("update/product.inf", "product.inf")?
//!     .add_file("update/maps.png", "maps.png")?
//!     .write("update/product.infz")?;
//! # Ok::<(), infrepo_bundle::BundleError>(())
//! ```

mod error;
mod hash;
mod icon;
mod manifest;

pub mod builder;
pub mod loader;

pub use builder::{BundleBuilder, build_repo_bundle};
pub use error::BundleError;
pub use hash::{compute_sha256, sha256_file};
pub use icon::{IconOutcome, extract_icon};
pub use loader::BundleLoader;
pub use manifest::ManifestWriter;

/// Result type for bundle operations.
pub type BundleResult<T> = Result<T, BundleError>;
