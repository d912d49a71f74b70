//! `product.inf` writer.

use crate::BundleResult;
use infrepo_core::{MANIFEST_HEADER, PackageRecord};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Owns the manifest file for one generation run.
///
/// [`ManifestWriter::create`] truncates the file and writes the header;
/// each [`ManifestWriter::append`] opens the file, adds one line and closes
/// it again, so an error part way through never leaves a handle open.
#[derive(Debug)]
pub struct ManifestWriter {
    path: PathBuf,
    records: usize,
}

impl ManifestWriter {
    /// Create or truncate the manifest at `path` and write the header line.
    pub fn create<P: AsRef<Path>>(path: P) -> BundleResult<Self> {
        let path = path.as_ref().to_path_buf();

        let mut file = File::create(&path)?;
        writeln!(file, "{MANIFEST_HEADER}")?;
        file.flush()?;

        Ok(Self { path, records: 0 })
    }

    /// Append one record line.
    pub fn append(&mut self, record: &PackageRecord) -> BundleResult<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        file.flush()?;

        self.records += 1;
        Ok(())
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records appended through this writer.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }
}
