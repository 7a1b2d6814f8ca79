//! Changelog validation checks.
//!
//! Stateless checks over the pull request inputs, each returning the first
//! failure it finds:
//! - Skip: the pull request carries the skip label
//! - Presence: the diff touches the changelog file
//! - Link: every added entry links its pull request
//! - Placement: every added entry sits in the unreleased section and is not
//!   already listed under a stable version

mod checks;


// Re-export public API
pub use checks::{
    check_contains_pr_link, check_has_changelog_diff, check_version_section, should_skip,
};
