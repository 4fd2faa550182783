// Default file names, resolved against the project root
pub const CHANGELOG_FILENAME: &str = "CHANGELOG.md";
pub const OUTPUT_FILENAME: &str = "whats-new.md";

// Second-level heading prefix that bounds changelog sections
pub const HEADING_MARKER: &str = "## ";

// Configuration file name
pub const CONFIG_FILENAME: &str = "whatsnew.yaml";

// Ancestor levels between the executable file and the project root.
// With the binary at <root>/target/<profile>/whatsnew this lands on <root>,
// so the tool resolves the same paths no matter where it is invoked from.
pub const ROOT_OFFSET_LEVELS: usize = 3;
