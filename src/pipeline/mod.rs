//! Changelog check orchestration.
//!
//! Runs the checks in order against one pull request, stopping at the
//! first failure:
//!
//! 1. Skip label → `Skipped`, nothing else is read
//! 2. Diff touches the changelog
//! 3. Added lines extracted from the changelog hunk
//! 4. Every added line links its pull request
//! 5. Changelog listed in the pull request files
//! 6. Every added line is a new entry in the unreleased section

mod report;


pub use report::{CheckReport, ReportStatus};

use tracing::{debug, info};

use crate::diff::extract_added_lines;
use crate::error::Result;
use crate::patterns::Patterns;
use crate::source::{PullRequestSource, find_changelog_file};
use crate::validate::{
    check_contains_pr_link, check_has_changelog_diff, check_version_section, should_skip,
};

/// Terminal state of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pull request carries the skip label.
    Skipped { label: String },
    /// Every check passed for the listed added entries.
    Passed { entries: Vec<String> },
}

impl Outcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    /// Human-readable summary of the outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::Skipped { label } => {
                format!("Changelog check skipped: pull request is labeled `{}`", label)
            }
            Outcome::Passed { entries } if entries.len() == 1 => {
                "Changelog check passed for 1 entry".to_string()
            }
            Outcome::Passed { entries } => {
                format!("Changelog check passed for {} entries", entries.len())
            }
        }
    }
}

/// Run every changelog check against the inputs `source` supplies.
///
/// Inputs are requested lazily: a skipped run reads only the labels, and the
/// file list and changelog content are only read once the diff-based checks
/// have passed.
///
/// # Returns
///
/// * `Ok(Outcome::Skipped)` - The skip label is present
/// * `Ok(Outcome::Passed)` - All checks passed
/// * `Err(CheckError)` - The first failing check, or a source failure
pub fn run_checks<S>(source: &S, patterns: &Patterns) -> Result<Outcome>
where
    S: PullRequestSource + ?Sized,
{
    let labels = source.labels()?;
    if should_skip(&labels, patterns) {
        info!(label = patterns.skip_label(), "skip label present, skipping checks");
        return Ok(Outcome::Skipped {
            label: patterns.skip_label().to_string(),
        });
    }

    let diff = source.diff()?;
    check_has_changelog_diff(&diff, patterns)?;

    let added_lines = extract_added_lines(&diff, patterns)?;
    debug!(count = added_lines.len(), "extracted added changelog lines");

    check_contains_pr_link(&added_lines, patterns)?;

    let files = source.files()?;
    let changelog = find_changelog_file(&files, patterns)?;
    let content = source.file_content(changelog)?;

    check_version_section(&content, &added_lines, patterns)?;

    info!(entries = added_lines.len(), "changelog checks passed");
    Ok(Outcome::Passed {
        entries: added_lines,
    })
}
