//! Bundle listing command.

use anyhow::{Context, Result};
use infrepo::BundleLoader;

/// List the contents of a bundle.
pub fn run(bundle_path: &str) -> Result<()> {
    let mut loader = BundleLoader::open(bundle_path)
        .with_context(|| format!("Failed to open: {bundle_path}"))?;

    println!("Bundle: {bundle_path}");

    println!("\nFiles:");
    for file in loader.list_files() {
        println!("  {file}");
    }

    let records = loader
        .manifest_lines()
        .context("Bundle has no readable manifest")?;
    println!("\nPackages: {}", records.len());
    for record in &records {
        let mut fields = record.split(',');
        let package = fields.nth(2).unwrap_or_default();
        let version = fields.nth(1).unwrap_or_default();
        println!("  {package} {version}");
    }

    Ok(())
}
