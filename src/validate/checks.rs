//! Check implementations.

use tracing::debug;

use crate::changelog::{extract_stable_versions, extract_unreleased_group, parse_sections};
use crate::diff::has_changelog_diff;
use crate::error::{CheckError, Result};
use crate::patterns::Patterns;

/// Whether any label is exactly the configured skip label.
pub fn should_skip<S: AsRef<str>>(labels: &[S], patterns: &Patterns) -> bool {
    labels
        .iter()
        .any(|label| label.as_ref() == patterns.skip_label())
}

/// Require the diff to contain a section for the changelog file.
///
/// # Returns
///
/// * `Ok(())` - The changelog file was changed
/// * `Err(CheckError::NoChangelogDiff)` - Asks for an entry or the skip label
pub fn check_has_changelog_diff(diff: &str, patterns: &Patterns) -> Result<()> {
    if has_changelog_diff(diff, patterns) {
        return Ok(());
    }

    Err(CheckError::NoChangelogDiff {
        file_name: patterns.changelog_file_name().to_string(),
        skip_label: patterns.skip_label().to_string(),
    })
}

/// Require every added line to contain a pull request link.
///
/// Fails on the first line without one, quoting it.
pub fn check_contains_pr_link(added_lines: &[String], patterns: &Patterns) -> Result<()> {
    let pr_link = patterns.pr_link();

    match added_lines.iter().find(|line| !pr_link.is_match(line.as_str())) {
        Some(line) => Err(CheckError::MissingPrLink {
            line: line.clone(),
            pattern: pr_link.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

/// Require every added line to be in the unreleased section only.
///
/// Each line is checked in order: it must appear verbatim in the unreleased
/// section, and must not appear verbatim in any stable version section.
///
/// # Returns
///
/// * `Ok(())` - All lines are new unreleased entries
/// * `Err(CheckError::NoUnreleasedSection)` - The changelog has no unreleased heading
/// * `Err(CheckError::WrongSection)` - A line is outside the unreleased section
/// * `Err(CheckError::DuplicateEntry)` - A line is already under a stable version
pub fn check_version_section(
    content: &str,
    added_lines: &[String],
    patterns: &Patterns,
) -> Result<()> {
    let sections = parse_sections(content);
    let unreleased = extract_unreleased_group(&sections, patterns)?;
    let stable = extract_stable_versions(&sections, patterns);

    debug!(
        sections = sections.len(),
        unreleased_lines = unreleased.lines.len(),
        stable_versions = stable.len(),
        "parsed changelog structure"
    );

    for line in added_lines {
        if !unreleased.contains(line) {
            return Err(CheckError::WrongSection {
                line: line.clone(),
                marker: patterns.unreleased_marker().to_string(),
            });
        }

        if let Some(version) = stable.find_containing(line) {
            return Err(CheckError::DuplicateEntry {
                line: line.clone(),
                version: version.to_string(),
            });
        }
    }

    Ok(())
}
