//! Repository configuration types

use crate::badging::DEFAULT_ICON_DENSITY;
use crate::{BUNDLE_FILE, LogLevel, MANIFEST_FILE, RepoError, RepoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one repository generation run
///
/// Every field has a default, so a TOML file only needs to name what it
/// changes:
///
/// ```toml
/// dump_tool = "/opt/android/build-tools/33.0.2/aapt"
/// work_dir = "/srv/update"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Path to the badging-dump executable (`aapt`)
    pub dump_tool: PathBuf,

    /// Directory holding the packages; all outputs are written here too
    pub work_dir: PathBuf,

    /// Value of the platform column
    pub platform: String,

    /// Value of the type column
    pub package_kind: String,

    /// Package file extension, matched without regard to case
    pub package_extension: String,

    /// Density of the icon variant to extract
    pub icon_density: u32,

    /// Initial log level
    pub log_level: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            dump_tool: PathBuf::from("aapt"),
            work_dir: PathBuf::from("."),
            platform: "Android".to_string(),
            package_kind: "plugin".to_string(),
            package_extension: "apk".to_string(),
            icon_density: DEFAULT_ICON_DENSITY,
            log_level: "info".to_string(),
        }
    }
}

impl RepoConfig {
    /// Create a configuration for the given tool and directory, defaults elsewhere
    pub fn new(dump_tool: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            dump_tool: dump_tool.into(),
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> RepoResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RepoError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check field values that serde cannot
    pub fn validate(&self) -> RepoResult<()> {
        if self.platform.trim().is_empty() {
            return Err(RepoError::Config("platform cannot be empty".to_string()));
        }
        if self.package_kind.trim().is_empty() {
            return Err(RepoError::Config("package_kind cannot be empty".to_string()));
        }
        if self.package_extension.trim().is_empty() {
            return Err(RepoError::Config(
                "package_extension cannot be empty".to_string(),
            ));
        }
        if self.package_extension.contains(',') || self.platform.contains(',') {
            return Err(RepoError::Config(
                "platform and package_extension cannot contain commas".to_string(),
            ));
        }
        if self.icon_density == 0 {
            return Err(RepoError::Config(
                "icon_density must be greater than zero".to_string(),
            ));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level
    pub fn level(&self) -> RepoResult<LogLevel> {
        LogLevel::parse(&self.log_level)
            .ok_or_else(|| RepoError::Config(format!("unknown log level: {}", self.log_level)))
    }

    /// Location of `product.inf`
    pub fn manifest_path(&self) -> PathBuf {
        self.work_dir.join(MANIFEST_FILE)
    }

    /// Location of `product.infz`
    pub fn bundle_path(&self) -> PathBuf {
        self.work_dir.join(BUNDLE_FILE)
    }
}
