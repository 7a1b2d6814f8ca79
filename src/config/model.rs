//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a changelog check run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog file name (default: "CHANGELOG.md").
    #[serde(default = "default_changelog_file_name")]
    pub changelog_file_name: String,

    /// Label that skips the check entirely (default: "skip changelog").
    #[serde(default = "default_skip_label")]
    pub skip_label: String,

    /// Hosted repository, `owner/name`, that PR links must reference.
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Text that marks the unreleased section heading (default: "Unreleased").
    #[serde(default = "default_unreleased_marker")]
    pub unreleased_marker: String,

    /// Literal text preceding the version in stable headings,
    /// including its trailing space.
    #[serde(default = "default_stable_heading_prefix")]
    pub stable_heading_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changelog_file_name: default_changelog_file_name(),
            skip_label: default_skip_label(),
            repository: default_repository(),
            unreleased_marker: default_unreleased_marker(),
            stable_heading_prefix: default_stable_heading_prefix(),
        }
    }
}
