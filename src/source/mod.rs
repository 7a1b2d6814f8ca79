//! Pull request inputs for changelog checks.
//!
//! The checks never fetch anything themselves. A [`PullRequestSource`]
//! supplies the raw inputs, already fetched:
//! - label names from the pull request metadata
//! - the pull request file list
//! - the unified diff of all files
//! - the post-change content of a listed file
//!
//! Input shapes follow the GitHub REST API (`GET /pulls/{n}` and
//! `GET /pulls/{n}/files`); unknown JSON fields are ignored.

mod local;
mod memory;
mod types;


// Re-export public API
pub use local::LocalSource;
pub use memory::InMemorySource;
pub use types::{Label, PullRequest, PullRequestFile, find_changelog_file};

use crate::error::Result;

/// Supplier of the raw inputs a check run consumes.
pub trait PullRequestSource {
    /// Names of the labels attached to the pull request.
    fn labels(&self) -> Result<Vec<String>>;

    /// Files touched by the pull request.
    fn files(&self) -> Result<Vec<PullRequestFile>>;

    /// Unified diff of the whole pull request.
    fn diff(&self) -> Result<String>;

    /// Full post-change content of `file`.
    fn file_content(&self, file: &PullRequestFile) -> Result<String>;
}
