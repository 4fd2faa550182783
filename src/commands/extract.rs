use crate::config::Config;
use crate::extract::extract_first_section;
use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

/// One-shot extraction: read the changelog, pull the newest section body,
/// write it to the output file. The changelog is read and parsed before the
/// output path is touched, so a bad input never clobbers an existing output.
pub fn cmd_extract(config: &Config) -> Result<()> {
    let changelog_path = config.changelog_path();
    let output_path = config.output_path();

    println!("🔍 Reading {}...", changelog_path.display());
    let content = fs::read_to_string(&changelog_path)
        .with_context(|| format!("Failed to read changelog {}", changelog_path.display()))?;
    debug!("Changelog is {} bytes", content.len());

    let body = extract_first_section(&content, &config.extract.marker)
        .with_context(|| format!("Failed to parse {}", changelog_path.display()))?;
    debug!("Extracted section body is {} bytes", body.len());

    fs::write(&output_path, &body)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("✅ Wrote latest release notes to {}", output_path.display());
    Ok(())
}
