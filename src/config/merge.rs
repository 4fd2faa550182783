use crate::config::types::*;

/// Trait for merging layered configuration inputs
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            paths: match (self.paths, other.paths) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
            extract: match (self.extract, other.extract) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
        }
    }
}

// Field-wise merges where the newer input wins
impl PathsInput {
    pub fn merge_with(self, other: PathsInput) -> PathsInput {
        PathsInput {
            changelog: other.changelog.or(self.changelog),
            output: other.output.or(self.output),
        }
    }
}

impl ExtractInput {
    pub fn merge_with(self, other: ExtractInput) -> ExtractInput {
        ExtractInput {
            marker: other.marker.or(self.marker),
        }
    }
}
