//! Filesystem-backed pull request source.
//!
//! Used in CI after a separate step has saved the API responses and the diff
//! to disk and checked out the pull request's head commit.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CheckError, Result};

use super::PullRequestSource;
use super::types::{PullRequest, PullRequestFile};

/// Reads saved API responses and a checked-out workspace.
#[derive(Debug, Clone)]
pub struct LocalSource {
    pull_request: PathBuf,
    files: PathBuf,
    diff: PathBuf,
    workspace: PathBuf,
}

impl LocalSource {
    /// # Arguments
    ///
    /// * `pull_request` - Saved pull request JSON
    /// * `files` - Saved pull request files JSON (array)
    /// * `diff` - Saved unified diff
    /// * `workspace` - Checkout of the head commit; file contents are read
    ///   from `<workspace>/<filename>`
    pub fn new(
        pull_request: impl Into<PathBuf>,
        files: impl Into<PathBuf>,
        diff: impl Into<PathBuf>,
        workspace: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pull_request: pull_request.into(),
            files: files.into(),
            diff: diff.into(),
            workspace: workspace.into(),
        }
    }
}

impl PullRequestSource for LocalSource {
    fn labels(&self) -> Result<Vec<String>> {
        let pull_request: PullRequest = read_json(&self.pull_request)?;
        Ok(pull_request.label_names())
    }

    fn files(&self) -> Result<Vec<PullRequestFile>> {
        read_json(&self.files)
    }

    fn diff(&self) -> Result<String> {
        read_text(&self.diff)
    }

    fn file_content(&self, file: &PullRequestFile) -> Result<String> {
        read_text(&self.workspace.join(&file.filename))
    }
}

fn read_text(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading input");
    std::fs::read_to_string(path).map_err(|e| {
        CheckError::SourceError(format!("failed to read '{}': {}", path.display(), e))
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| {
        CheckError::SourceError(format!("failed to parse '{}' as JSON: {}", path.display(), e))
    })
}
