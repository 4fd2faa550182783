pub mod builder;
pub mod defaults;
pub mod merge;
pub mod types;


pub use builder::ConfigBuilder;
pub use types::*;

use crate::constants;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locate the project root: an explicit override, or a fixed number of
/// ancestor levels above the running executable. Never the working directory,
/// so invocation location does not change which files are touched.
pub fn resolve_project_root(override_root: Option<&str>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        return Ok(PathBuf::from(root));
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.ancestors()
        .nth(constants::ROOT_OFFSET_LEVELS)
        .map(Path::to_path_buf)
        .with_context(|| {
            format!(
                "Executable path {} has fewer than {} ancestor directories",
                exe.display(),
                constants::ROOT_OFFSET_LEVELS
            )
        })
}

/// Main configuration loading function
pub fn load_config(root_dir: &Path, config_file: &str) -> Result<ConfigInput> {
    let path = if Path::new(config_file).is_absolute() {
        PathBuf::from(config_file)
    } else {
        root_dir.join(config_file)
    };

    if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    } else {
        Ok(ConfigInput::default())
    }
}
