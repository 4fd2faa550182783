use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub paths: Option<PathsInput>,
    pub extract: Option<ExtractInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathsInput {
    pub changelog: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExtractInput {
    pub marker: Option<String>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root against which relative paths are resolved
    pub root: PathBuf,
    pub paths: Paths,
    pub extract: Extract,
}

#[derive(Debug, Clone)]
pub struct Paths {
    pub changelog: String,
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct Extract {
    pub marker: String,
}

impl Config {
    /// Absolute changelog path. An absolute configured path wins over the root.
    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.paths.changelog)
    }

    /// Absolute output path. An absolute configured path wins over the root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.paths.output)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    /// Project root directory (default: resolved from the executable location)
    #[arg(long)]
    pub root: Option<String>,

    /// Changelog file path, relative to the project root
    #[arg(long)]
    pub changelog: Option<String>,

    /// Output file path, relative to the project root
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// Heading prefix that bounds changelog sections
    #[arg(long)]
    pub marker: Option<String>,
}

impl From<PathArgs> for PathsInput {
    fn from(args: PathArgs) -> Self {
        Self {
            changelog: args.changelog,
            output: args.output,
        }
    }
}

impl From<ExtractArgs> for ExtractInput {
    fn from(args: ExtractArgs) -> Self {
        Self {
            marker: args.marker,
        }
    }
}
