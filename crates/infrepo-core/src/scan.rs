//! Working directory scanning

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Regular files in `dir` whose extension equals `extension`, ignoring case
///
/// Results are sorted by file name. Subdirectories are not descended into.
pub fn files_with_extension(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // Follows symlinks; dangling links are skipped.
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
