//! Bundle loading utilities.
//!
//! The [`BundleLoader`] reads a `product.infz` back for listing and tests.
//! It does not validate the manifest's contents.

use crate::{BundleError, BundleResult};
use infrepo_core::{MANIFEST_FILE, MANIFEST_HEADER};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Loader for repository bundles.
///
/// # Example
///
/// ```no_run
/// use infrepo_bundle::loader::BundleLoader;
///
/// let mut loader = BundleLoader::open("update/product.infz")?;
/// for file in loader.list_files() {
///     println!("{file}");
/// }
/// let records = loader.manifest_lines()?;
/// # Ok::<(), infrepo_bundle::BundleError>(())
/// ```
#[derive(Debug)]
pub struct BundleLoader {
    archive: ZipArchive<File>,
}

impl BundleLoader {
    /// Open a bundle file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> BundleResult<Self> {
        let file = File::open(path.as_ref())?;
        let archive = ZipArchive::new(file)?;

        Ok(Self { archive })
    }

    /// Read a file from the bundle as bytes.
    pub fn read_file(&mut self, path: &str) -> BundleResult<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| BundleError::MissingFile(format!("File not found in bundle: {path}")))?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Read a file from the bundle as a string.
    pub fn read_file_string(&mut self, path: &str) -> BundleResult<String> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| BundleError::MissingFile(format!("File not found in bundle: {path}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Record lines of the bundled manifest, header excluded.
    pub fn manifest_lines(&mut self) -> BundleResult<Vec<String>> {
        let manifest = self.read_file_string(MANIFEST_FILE)?;

        Ok(manifest
            .lines()
            .filter(|line| *line != MANIFEST_HEADER && !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// List all files in the bundle.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.name_for_index(i).map(String::from))
            .collect()
    }

    /// Check if a file exists in the bundle.
    #[must_use]
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.index_for_name(path).is_some()
    }
}
