//! Startup checks run before any output is written

use crate::{RepoConfig, RepoError, RepoResult};

/// Verify that the dump tool is a file and the working directory a directory
///
/// Fails before touching the filesystem otherwise.
pub fn preflight(config: &RepoConfig) -> RepoResult<()> {
    if !config.dump_tool.is_file() {
        return Err(RepoError::DumpToolNotFound(config.dump_tool.clone()));
    }
    if !config.work_dir.is_dir() {
        return Err(RepoError::WorkDirNotFound(config.work_dir.clone()));
    }

    tracing::debug!(
        "Preflight passed: tool {}, directory {}",
        config.dump_tool.display(),
        config.work_dir.display()
    );
    Ok(())
}
