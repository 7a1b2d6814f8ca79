//! GitHub-shaped pull request data.

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};
use crate::patterns::Patterns;

/// Pull request metadata. Only the fields the checks read are modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl PullRequest {
    /// Label names in API order.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// One entry of the pull request file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    /// Repository-relative path.
    pub filename: String,
    /// API reference for fetching the file's content at the head commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents_url: Option<String>,
}

impl PullRequestFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents_url: None,
        }
    }
}

/// Find the changelog file in the pull request file list.
///
/// The file name must equal the configured changelog file name exactly, so
/// only the repository-root changelog is found.
///
/// # Returns
///
/// * `Ok(&PullRequestFile)` - The first matching entry
/// * `Err(CheckError::NoChangelogFile)` - The changelog was not touched
pub fn find_changelog_file<'a>(
    files: &'a [PullRequestFile],
    patterns: &Patterns,
) -> Result<&'a PullRequestFile> {
    files
        .iter()
        .find(|f| f.filename == patterns.changelog_file_name())
        .ok_or_else(|| CheckError::NoChangelogFile {
            file_name: patterns.changelog_file_name().to_string(),
        })
}
