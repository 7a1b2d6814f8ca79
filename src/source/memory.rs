//! In-memory pull request source.

use std::collections::BTreeMap;

use crate::error::{CheckError, Result};

use super::PullRequestSource;
use super::types::PullRequestFile;

/// Source backed by data the caller already holds.
///
/// File contents are keyed by `filename`.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    labels: Vec<String>,
    files: Vec<PullRequestFile>,
    diff: String,
    contents: BTreeMap<String, String>,
}

impl InMemorySource {
    pub fn new(diff: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Add a file to the file list with its post-change content.
    pub fn with_file(mut self, filename: impl Into<String>, content: impl Into<String>) -> Self {
        let filename = filename.into();
        self.files.push(PullRequestFile::new(filename.clone()));
        self.contents.insert(filename, content.into());
        self
    }
}

impl PullRequestSource for InMemorySource {
    fn labels(&self) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }

    fn files(&self) -> Result<Vec<PullRequestFile>> {
        Ok(self.files.clone())
    }

    fn diff(&self) -> Result<String> {
        Ok(self.diff.clone())
    }

    fn file_content(&self, file: &PullRequestFile) -> Result<String> {
        self.contents.get(&file.filename).cloned().ok_or_else(|| {
            CheckError::SourceError(format!("no content available for '{}'", file.filename))
        })
    }
}
