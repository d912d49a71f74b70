//! Manifest record types

use crate::{BadgingInfo, RepoConfig};

/// Header line of `product.inf`, describing the thirteen columns.
pub const MANIFEST_HEADER: &str = "#platform (Android Windows or iOS), type (app or plugin), \
full package name, display/label, version, revision code (integer), \
relative path to APK file, relative path to icon file, description, \
apk hash, os requirement, tak prereq (e.g. plugin-api), apk size";

/// Filesystem facts about one package file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFacts {
    /// File name relative to the working directory, e.g. `a.apk`
    pub file_name: String,
    /// File name without extension, e.g. `a`
    pub stem: String,
    /// SHA-256 of the file contents, lowercase hex
    pub hash: String,
    /// Size in bytes
    pub size: u64,
}

/// One row of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub platform: String,
    pub kind: String,
    pub package_name: String,
    pub label: String,
    pub version_name: String,
    pub version_code: String,
    pub apk_path: String,
    /// Empty when no icon was extracted
    pub icon_path: String,
    pub description: String,
    pub hash: String,
    pub os_requirement: String,
    pub prerequisite: String,
    pub size: u64,
}

impl PackageRecord {
    /// Assemble a record from parsed badging and file facts
    ///
    /// Label falls back to the file stem, description to
    /// `No description for <label>`.
    pub fn from_badging(
        config: &RepoConfig,
        info: &BadgingInfo,
        facts: &PackageFacts,
        icon_path: Option<&str>,
    ) -> Self {
        let label = info.label_or(&facts.stem);
        let description = info.description_or(&label);

        Self {
            platform: config.platform.clone(),
            kind: config.package_kind.clone(),
            package_name: info.package_name.clone().unwrap_or_default(),
            label,
            version_name: info.version_name.clone().unwrap_or_default(),
            version_code: info.version_code.clone().unwrap_or_default(),
            apk_path: facts.file_name.clone(),
            icon_path: icon_path.unwrap_or_default().to_string(),
            description,
            hash: facts.hash.clone(),
            os_requirement: info.min_sdk.clone().unwrap_or_default(),
            prerequisite: info.prerequisite.clone().unwrap_or_default(),
            size: facts.size,
        }
    }

    /// Render as one manifest line, without the trailing newline
    ///
    /// Fields are joined with commas as-is; the description has already had
    /// its commas replaced.
    pub fn to_line(&self) -> String {
        let size = self.size.to_string();
        let fields: [&str; 13] = [
            &self.platform,
            &self.kind,
            &self.package_name,
            &self.label,
            &self.version_name,
            &self.version_code,
            &self.apk_path,
            &self.icon_path,
            &self.description,
            &self.hash,
            &self.os_requirement,
            &self.prerequisite,
            &size,
        ];
        fields.join(",")
    }
}

impl std::fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_line())
    }
}
