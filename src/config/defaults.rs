use crate::config::types::*;
use crate::constants;

impl Default for Paths {
    fn default() -> Self {
        Self {
            changelog: constants::CHANGELOG_FILENAME.to_string(),
            output: constants::OUTPUT_FILENAME.to_string(),
        }
    }
}

impl Default for Extract {
    fn default() -> Self {
        Self {
            marker: constants::HEADING_MARKER.to_string(),
        }
    }
}
