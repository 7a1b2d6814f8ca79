//! Machine-readable run report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CheckError, FailureKind, Result};

use super::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Skipped,
    Failed,
}

/// Result of one run, as emitted by `--format json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let (status, entries) = match outcome {
            Outcome::Skipped { .. } => (ReportStatus::Skipped, Vec::new()),
            Outcome::Passed { entries } => (ReportStatus::Passed, entries.clone()),
        };

        Self {
            status,
            kind: None,
            message: outcome.message(),
            entries,
            checked_at: Utc::now(),
        }
    }

    pub fn from_error(err: &CheckError) -> Self {
        Self {
            status: ReportStatus::Failed,
            kind: Some(err.kind()),
            message: err.to_string(),
            entries: Vec::new(),
            checked_at: Utc::now(),
        }
    }

    pub fn from_result(result: &Result<Outcome>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(outcome),
            Err(err) => Self::from_error(err),
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckError::UserError(format!("failed to serialize report: {}", e)))
    }
}
