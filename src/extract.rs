use anyhow::{Result, bail};

/// Extract the trimmed body of the first (topmost) changelog section.
///
/// The document is split on every occurrence of `marker`. Fragment 0 is the
/// preamble (document title), fragment 1 is the newest section: its first line
/// is the remainder of its own heading and is dropped; everything up to the
/// next marker is the body, returned with leading/trailing whitespace trimmed.
/// Interior blank lines are preserved verbatim.
///
/// A well-formed changelog has at least two marker occurrences (the newest
/// section plus the heading that closes it). Anything less is rejected so a
/// truncated or retitled changelog fails loudly instead of publishing a
/// half-section.
pub fn extract_first_section(content: &str, marker: &str) -> Result<String> {
    if marker.is_empty() {
        bail!("heading marker must not be empty");
    }

    let fragments: Vec<&str> = content.split(marker).collect();
    if fragments.len() < 3 {
        bail!(
            "malformed changelog: expected at least two '{}' headings, found {}",
            marker.trim_end(),
            fragments.len() - 1
        );
    }

    let section = fragments[1];
    let body = match section.split_once('\n') {
        Some((_title, rest)) => rest,
        // Heading with no following newline means an empty section body
        None => "",
    };

    Ok(body.trim().to_string())
}
