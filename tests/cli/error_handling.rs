//! CLI error handling tests
//!
//! Every failure here must exit non-zero with a diagnostic and must never
//! create or clobber the output file.

use crate::helpers::cli::with_cli_helper;
use anyhow::Result;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;

/// Missing changelog is an input-not-found error and leaves no output behind
#[test]
fn test_missing_changelog_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper
            .command()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read changelog"));

        assert!(!helper.output_path().exists());

        Ok(())
    })
}

/// Fewer than two headings cannot bound a section; truncation would be silent
/// data loss, so the run must fail as malformed input.
#[rstest]
#[case::single_heading("# Title\n## 1.0.0\n- only release so far\n")]
#[case::no_headings("# Title\njust prose, no releases\n")]
#[case::empty_file("")]
fn test_malformed_changelog_error(#[case] changelog: &str) -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_changelog(changelog)?;

        helper
            .command()
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed changelog"));

        assert!(!helper.output_path().exists());

        Ok(())
    })
}

/// A parse failure must not clobber output from an earlier successful run
#[test]
fn test_malformed_changelog_preserves_existing_output() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_file("whats-new.md", "notes from the last good run")?;
        helper.write_changelog("# Title\n## 1.0.0\n- truncated\n")?;

        helper.command().assert().failure();

        assert_eq!(helper.read_output()?, "notes from the last good run");

        Ok(())
    })
}

/// Output landing in a missing directory is a fatal write error
#[test]
fn test_unwritable_output_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_changelog("# T\n## A\nbody\n## B\nold\n")?;

        helper
            .command()
            .args(["--output", "no-such-dir/whats-new.md"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to write"));

        Ok(())
    })
}

/// An empty marker cannot bound any section and must be rejected up front
#[test]
fn test_empty_marker_error() -> Result<()> {
    with_cli_helper(|helper| {
        helper.write_changelog("# T\n## A\nbody\n## B\nold\n")?;

        helper
            .command()
            .args(["--marker", ""])
            .assert()
            .failure()
            .stderr(predicate::str::contains("must not be empty"));

        assert!(!helper.output_path().exists());

        Ok(())
    })
}

/// Invalid YAML in the config file gives a helpful error
#[test]
fn test_invalid_config_yaml_error() -> Result<()> {
    with_cli_helper(|helper| {
        fs::write(
            helper.project_root.join("whatsnew.yaml"),
            "paths: [unbalanced",
        )?;
        helper.write_changelog("# T\n## A\nbody\n## B\nold\n")?;

        helper
            .command()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid config file"));

        Ok(())
    })
}

/// Unreadable changelog names the offending path in the diagnostic
#[test]
fn test_error_message_names_the_path() -> Result<()> {
    with_cli_helper(|helper| {
        helper
            .command()
            .args(["--changelog", "missing/CHANGELOG.md"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("CHANGELOG.md"));

        Ok(())
    })
}
