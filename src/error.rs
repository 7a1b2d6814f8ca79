//! Error types for changelog-check.
//!
//! Uses thiserror for derive macros. Every validation failure carries a
//! precomposed, user-facing message that is surfaced verbatim on the pull
//! request.

use crate::exit_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for changelog-check operations.
///
/// The first six variants are validation failures: they end the run and
/// reject the changelog contribution. `UserError` and `SourceError` mean the
/// run could not be carried out at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The diff has no hunk for the changelog file.
    #[error(
        "Add a non-empty changelog entry in a {file_name} or add a `{skip_label}` label if not applicable."
    )]
    NoChangelogDiff {
        file_name: String,
        skip_label: String,
    },

    /// The changelog file is absent from the pull request's file list.
    #[error("No {file_name} file in PR files")]
    NoChangelogFile { file_name: String },

    /// The changelog content has no heading containing the unreleased marker.
    #[error("No '{marker}' section in {changelog}")]
    NoUnreleasedSection { marker: String, changelog: String },

    /// An added line lacks the pull request link.
    #[error("The changelog entry \"{line}\" should contain a link to the original PR that matches `{pattern}`")]
    MissingPrLink { line: String, pattern: String },

    /// An added line is not present in the unreleased section.
    #[error("{line} should be placed in '{marker}' section")]
    WrongSection { line: String, marker: String },

    /// An added line already appears under a released version.
    #[error("The changelog entry \"{line}\" is already contained in {version} changelog.")]
    DuplicateEntry { line: String, version: String },

    /// Invalid arguments, invalid config, or unreadable local input.
    #[error("{0}")]
    UserError(String),

    /// The pull request inputs could not be obtained from the source.
    #[error("Failed to read pull request data: {0}")]
    SourceError(String),
}

/// Serializable tag identifying the kind of a [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NoChangelogDiff,
    NoChangelogFile,
    NoUnreleasedSection,
    MissingPrLink,
    WrongSection,
    DuplicateEntry,
    UserError,
    SourceError,
}

impl CheckError {
    /// Returns the tag for this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::NoChangelogDiff { .. } => FailureKind::NoChangelogDiff,
            CheckError::NoChangelogFile { .. } => FailureKind::NoChangelogFile,
            CheckError::NoUnreleasedSection { .. } => FailureKind::NoUnreleasedSection,
            CheckError::MissingPrLink { .. } => FailureKind::MissingPrLink,
            CheckError::WrongSection { .. } => FailureKind::WrongSection,
            CheckError::DuplicateEntry { .. } => FailureKind::DuplicateEntry,
            CheckError::UserError(_) => FailureKind::UserError,
            CheckError::SourceError(_) => FailureKind::SourceError,
        }
    }

    /// Whether this error rejects the changelog contribution itself.
    pub fn is_validation_failure(&self) -> bool {
        !matches!(self, CheckError::UserError(_) | CheckError::SourceError(_))
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::UserError(_) => exit_codes::USER_ERROR,
            CheckError::SourceError(_) => exit_codes::SOURCE_FAILURE,
            _ => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for changelog-check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
