//! Core diff slicing logic.

use std::ops::Range;

use crate::error::{CheckError, Result};
use crate::patterns::{DIFF_MARKER, Patterns};

/// Whether the diff contains a section for the changelog file.
pub fn has_changelog_diff(diff: &str, patterns: &Patterns) -> bool {
    patterns.changelog_header().is_match(diff)
}

/// Locate the byte range of the changelog's hunk region within `diff`.
///
/// The region starts right after the first hunk header following the
/// changelog's `diff --git` header (or right after the header itself when
/// no hunk header follows) and ends before the next `diff --git` marker.
///
/// # Returns
///
/// * `Ok(Range<usize>)` - Byte range into `diff`
/// * `Err(CheckError::NoChangelogDiff)` - No changelog header in the diff
pub fn locate_changelog_hunk(diff: &str, patterns: &Patterns) -> Result<Range<usize>> {
    let header = patterns
        .changelog_header()
        .find(diff)
        .ok_or_else(|| no_changelog_diff(patterns))?;

    let base = header.end();
    let rest = &diff[base..];

    let start = patterns
        .hunk_header()
        .find(rest)
        .map(|hunk| hunk.end())
        .unwrap_or(0);

    let end = rest[start..]
        .find(DIFF_MARKER)
        .map(|offset| start + offset)
        .unwrap_or(rest.len());

    Ok(base + start..base + end)
}

/// Extract the lines the changelog hunk adds.
///
/// A line counts as added when its trimmed form starts with `+`. The result
/// is the trimmed line with that single marker removed; whitespace after the
/// marker belongs to the file content and is kept.
///
/// # Example
///
/// ```
/// use changelog_check::config::Config;
/// use changelog_check::diff::extract_added_lines;
/// use changelog_check::patterns::Patterns;
///
/// let patterns = Patterns::from_config(&Config::default()).unwrap();
/// let diff = "diff --git a/CHANGELOG.md b/CHANGELOG.md\n\
///             @@ -1,2 +1,3 @@\n\
///              ## Unreleased\n\
///             +- Fix crash\n";
///
/// let added = extract_added_lines(diff, &patterns).unwrap();
/// assert_eq!(added, vec!["- Fix crash".to_string()]);
/// ```
pub fn extract_added_lines(diff: &str, patterns: &Patterns) -> Result<Vec<String>> {
    let region = locate_changelog_hunk(diff, patterns)?;

    Ok(diff[region]
        .split('\n')
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('+'))
        .map(str::to_string)
        .collect())
}

fn no_changelog_diff(patterns: &Patterns) -> CheckError {
    CheckError::NoChangelogDiff {
        file_name: patterns.changelog_file_name().to_string(),
        skip_label: patterns.skip_label().to_string(),
    }
}
