//! Repository generation command.

use anyhow::{Context, Result};
use infrepo::{AaptDumpTool, RepoConfig, RepoGenerator};
use std::path::PathBuf;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub dump_tool: Option<String>,
    pub dir: Option<String>,
    pub log_level: Option<String>,
}

/// Run the generate command.
pub fn run(config_path: Option<String>, overrides: Overrides) -> Result<()> {
    let config = resolve_config(config_path, overrides)?;

    infrepo_logging::init_logging(config.level()?);

    let tool = AaptDumpTool::new(&config.dump_tool);
    let generator = RepoGenerator::new(config, tool);
    let summary = generator.run().with_context(|| {
        format!(
            "Failed to generate repository in {}",
            generator.config().work_dir.display()
        )
    })?;

    println!(
        "Wrote {} ({} package(s), {} icon(s))",
        summary.manifest.display(),
        summary.packages,
        summary.icons
    );
    println!("Wrote {}", summary.bundle.display());
    if summary.warnings > 0 {
        println!("{} warning(s), see log output above", summary.warnings);
    }

    Ok(())
}

/// Load the configuration file, if any, and apply command-line overrides.
fn resolve_config(config_path: Option<String>, overrides: Overrides) -> Result<RepoConfig> {
    let mut config = match config_path {
        Some(path) => RepoConfig::from_file(&path)
            .with_context(|| format!("Failed to load configuration: {path}"))?,
        None => RepoConfig::default(),
    };

    if let Some(dump_tool) = overrides.dump_tool {
        config.dump_tool = PathBuf::from(dump_tool);
    }
    if let Some(dir) = overrides.dir {
        config.work_dir = PathBuf::from(dir);
    }
    if let Some(log_level) = overrides.log_level {
        config.log_level = log_level;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
