use crate::config::{merge::Merge, types::*};
use std::path::PathBuf;

pub struct ConfigBuilder {
    root: PathBuf,
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Config {
        Config {
            root: self.root,
            paths: Self::resolve_paths(self.config_input.paths),
            extract: Self::resolve_extract(self.config_input.extract),
        }
    }

    fn resolve_paths(input: Option<PathsInput>) -> Paths {
        let defaults = Paths::default();
        let input = input.unwrap_or_default();

        Paths {
            changelog: input.changelog.unwrap_or(defaults.changelog),
            output: input.output.unwrap_or(defaults.output),
        }
    }

    fn resolve_extract(input: Option<ExtractInput>) -> Extract {
        let defaults = Extract::default();
        let input = input.unwrap_or_default();

        Extract {
            marker: input.marker.unwrap_or(defaults.marker),
        }
    }
}
