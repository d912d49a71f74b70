//! Icon extraction from package archives.

use crate::{BundleError, BundleResult};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

/// Result of trying to extract a package's icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// Icon written to the contained path.
    Extracted(PathBuf),
    /// The badging dump named no icon.
    NoIcon,
    /// The badging dump named an entry the archive does not contain.
    MissingEntry,
}

impl IconOutcome {
    /// File name of the extracted icon, if any.
    pub fn file_name(&self) -> Option<String> {
        match self {
            IconOutcome::Extracted(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            IconOutcome::NoIcon | IconOutcome::MissingEntry => None,
        }
    }
}

/// Extract `entry` from the package archive as `work_dir/output_name`.
///
/// The entry is first written at its own relative path under `work_dir`,
/// then moved to the flat output name, and the directories created for it
/// are removed again as long as they are empty.
///
/// A missing entry is reported as [`IconOutcome::MissingEntry`] rather than
/// an error so the caller can carry on with the next package.
pub fn extract_icon(
    package: &Path,
    entry: Option<&str>,
    work_dir: &Path,
    output_name: &str,
) -> BundleResult<IconOutcome> {
    let entry = match entry {
        Some(entry) if !entry.is_empty() => entry,
        _ => {
            tracing::info!("  no icon for {}", package.display());
            return Ok(IconOutcome::NoIcon);
        }
    };

    if output_name.is_empty() || output_name.contains(['/', '\\']) {
        return Err(BundleError::InvalidPath(output_name.to_string()));
    }

    let file = File::open(package)?;
    let mut archive = ZipArchive::new(file)?;

    let mut zipped = match archive.by_name(entry) {
        Ok(zipped) => zipped,
        Err(ZipError::FileNotFound) => {
            tracing::warn!("  icon {entry} not found in {}", package.display());
            return Ok(IconOutcome::MissingEntry);
        }
        Err(e) => return Err(e.into()),
    };

    if zipped.is_dir() {
        return Err(BundleError::InvalidPath(entry.to_string()));
    }
    let relative = zipped
        .enclosed_name()
        .ok_or_else(|| BundleError::InvalidPath(entry.to_string()))?;

    let extracted = work_dir.join(&relative);
    if let Some(parent) = extracted.parent() {
        fs::create_dir_all(parent)?;
    }
    {
        let mut out = File::create(&extracted)?;
        io::copy(&mut zipped, &mut out)?;
    }

    let target = work_dir.join(output_name);
    fs::rename(&extracted, &target)?;
    remove_empty_parents(work_dir, &relative);

    tracing::info!("  icon: {output_name}");
    Ok(IconOutcome::Extracted(target))
}

/// Remove the directories of `relative` under `root`, deepest first,
/// stopping at the first one that cannot be removed.
fn remove_empty_parents(root: &Path, relative: &Path) {
    let Some(parent) = relative.parent() else {
        return;
    };

    for dir in parent.ancestors() {
        if dir.as_os_str().is_empty() {
            break;
        }
        if fs::remove_dir(root.join(dir)).is_err() {
            break;
        }
    }
}
