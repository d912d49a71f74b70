//! Bundle creation utilities.
//!
//! The [`BundleBuilder`] provides a fluent API for creating `product.infz`
//! archives; [`build_repo_bundle`] assembles one from a working directory.

use crate::{BundleError, BundleResult};
use infrepo_core::{BUNDLE_FILE, ICON_EXTENSION, MANIFEST_FILE, files_with_extension};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builder for creating repository bundles.
///
/// # Example
///
/// ```no_run
/// use infrepo_bundle::BundleBuilder;
///
/// BundleBuilder::new()
///     .add_file("update/product.inf", "product.inf")?
///     .add_bytes("notes.txt", b"hello".to_vec())
///     .write("update/product.infz")?;
/// # Ok::<(), infrepo_bundle::BundleError>(())
/// ```
#[derive(Debug, Default)]
pub struct BundleBuilder {
    files: Vec<BundleFile>,
}

/// A file to include in the bundle.
#[derive(Debug)]
struct BundleFile {
    /// Path within the bundle archive.
    archive_path: String,
    /// File contents.
    contents: Vec<u8>,
}

impl BundleBuilder {
    /// Create an empty bundle builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file from disk under `archive_name`.
    pub fn add_file<P: AsRef<Path>>(
        mut self,
        source_path: P,
        archive_name: &str,
    ) -> BundleResult<Self> {
        let source_path = source_path.as_ref();

        let contents = fs::read(source_path).map_err(|e| {
            BundleError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", source_path.display(), e),
            ))
        })?;

        self.files.push(BundleFile {
            archive_path: archive_name.to_string(),
            contents,
        });

        Ok(self)
    }

    /// Add raw bytes as a file in the bundle.
    pub fn add_bytes(mut self, archive_path: &str, contents: Vec<u8>) -> Self {
        self.files.push(BundleFile {
            archive_path: archive_path.to_string(),
            contents,
        });
        self
    }

    /// Archive paths added so far, in insertion order.
    #[must_use]
    pub fn archive_paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.archive_path.as_str()).collect()
    }

    /// Write the bundle to a file, replacing any existing one.
    pub fn write<P: AsRef<Path>>(self, output_path: P) -> BundleResult<()> {
        let output_path = output_path.as_ref();

        let file = File::create(output_path)?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for bundle_file in &self.files {
            zip.start_file(bundle_file.archive_path.as_str(), options)?;
            zip.write_all(&bundle_file.contents)?;
        }

        zip.finish()?;

        Ok(())
    }
}

/// Bundle `product.inf` and every icon currently in `work_dir`.
///
/// Icons are picked up by extension, sorted by name, whether or not the
/// current run produced them. Returns the path of the written bundle.
pub fn build_repo_bundle(work_dir: &Path) -> BundleResult<PathBuf> {
    let manifest_path = work_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(BundleError::MissingFile(
            manifest_path.display().to_string(),
        ));
    }

    let mut builder = BundleBuilder::new().add_file(&manifest_path, MANIFEST_FILE)?;

    for icon in files_with_extension(work_dir, ICON_EXTENSION)? {
        let name = icon
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| BundleError::InvalidPath(icon.display().to_string()))?;
        builder = builder.add_file(&icon, &name)?;
    }

    tracing::debug!("Bundling {}", builder.archive_paths().join(", "));

    let output_path = work_dir.join(BUNDLE_FILE);
    builder.write(&output_path)?;

    Ok(output_path)
}
