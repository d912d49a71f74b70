//! Repository generation run

use crate::GenerateResult;
use infrepo_bundle::{IconOutcome, ManifestWriter, build_repo_bundle, extract_icon, sha256_file};
use infrepo_core::{
    BadgingInfo, BadgingParser, DumpTool, ICON_EXTENSION, PackageFacts, PackageRecord, RepoConfig,
    files_with_extension, preflight,
};
use std::fs;
use std::path::{Path, PathBuf};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Packages written to the manifest
    pub packages: usize,
    /// Icons extracted during this run
    pub icons: usize,
    /// Per-package problems that were logged and skipped
    pub warnings: usize,
    pub manifest: PathBuf,
    pub bundle: PathBuf,
}

/// Per-package result folded into the summary
struct PackageOutcome {
    icon: bool,
    warnings: usize,
}

/// Drives preflight, manifest writing, per-package processing and bundling
///
/// Packages are processed one at a time in file name order. Problems with a
/// single package (dump tool failures, missing or unreadable icons) are
/// logged and that package is still written; configuration, preflight and
/// filesystem failures end the run.
pub struct RepoGenerator<D> {
    config: RepoConfig,
    dump_tool: D,
    parser: BadgingParser,
}

impl<D: DumpTool> RepoGenerator<D> {
    /// Create a generator using `dump_tool` for badging output
    pub fn new(config: RepoConfig, dump_tool: D) -> Self {
        let parser = BadgingParser::with_icon_density(config.icon_density);
        Self {
            config,
            dump_tool,
            parser,
        }
    }

    /// The configuration this generator runs with
    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Run the full pipeline
    pub fn run(&self) -> GenerateResult<RunSummary> {
        self.config.validate()?;
        preflight(&self.config)?;

        let work_dir = &self.config.work_dir;
        let mut manifest = ManifestWriter::create(self.config.manifest_path())?;

        let packages = files_with_extension(work_dir, &self.config.package_extension)?;
        tracing::info!(
            "Found {} package(s) in {}",
            packages.len(),
            work_dir.display()
        );

        let mut icons = 0;
        let mut warnings = 0;
        for package in &packages {
            let outcome = self.process_package(package, &mut manifest)?;
            if outcome.icon {
                icons += 1;
            }
            warnings += outcome.warnings;
        }

        let bundle = build_repo_bundle(work_dir)?;
        tracing::info!(
            "Wrote {} and {}",
            manifest.path().display(),
            bundle.display()
        );

        Ok(RunSummary {
            packages: manifest.records(),
            icons,
            warnings,
            manifest: manifest.path().to_path_buf(),
            bundle,
        })
    }

    fn process_package(
        &self,
        package: &Path,
        manifest: &mut ManifestWriter,
    ) -> GenerateResult<PackageOutcome> {
        let file_name = file_name_of(package);
        let stem = package
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());
        tracing::info!("Processing {file_name}");

        let mut warnings = 0;
        let info = self.read_badging(package, &file_name, &mut warnings);

        let output_name = format!("{stem}.{ICON_EXTENSION}");
        let icon = match extract_icon(
            package,
            info.icon_path.as_deref(),
            &self.config.work_dir,
            &output_name,
        ) {
            Ok(outcome @ IconOutcome::Extracted(_)) => outcome.file_name(),
            Ok(IconOutcome::NoIcon) => None,
            Ok(IconOutcome::MissingEntry) => {
                warnings += 1;
                None
            }
            Err(e) => {
                tracing::warn!("  icon extraction failed for {file_name}: {e}");
                warnings += 1;
                None
            }
        };

        let facts = PackageFacts {
            hash: sha256_file(package)?,
            size: fs::metadata(package)?.len(),
            file_name,
            stem,
        };

        let record = PackageRecord::from_badging(&self.config, &info, &facts, icon.as_deref());
        manifest.append(&record)?;

        Ok(PackageOutcome {
            icon: icon.is_some(),
            warnings,
        })
    }

    /// Dump and parse badging, tolerating any tool failure
    fn read_badging(&self, package: &Path, file_name: &str, warnings: &mut usize) -> BadgingInfo {
        let output = match self.dump_tool.dump_badging(package) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("  dump tool could not run for {file_name}: {e}");
                *warnings += 1;
                return BadgingInfo::default();
            }
        };

        if !output.succeeded() {
            match output.exit_code {
                Some(code) => tracing::warn!("  dump tool exited with status {code} for {file_name}"),
                None => tracing::warn!("  dump tool was terminated for {file_name}"),
            }
            *warnings += 1;
        }

        let info = self.parser.parse(&output.text);
        if info.is_empty() {
            tracing::warn!("  no badging fields recognized for {file_name}");
            *warnings += 1;
        }
        info
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
