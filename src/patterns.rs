//! Compiled recognition patterns for changelog checks.
//!
//! All patterns are built from [`Config`] once per run and shared read-only
//! by the diff slicer, the changelog parser and the validators.

use crate::config::Config;
use crate::error::{CheckError, Result};
use regex::Regex;

/// Substring that opens every per-file section of a unified diff.
pub const DIFF_MARKER: &str = "diff --git";

/// Compiled patterns and literals for one validation run.
#[derive(Debug, Clone)]
pub struct Patterns {
    changelog_header: Regex,
    hunk_header: Regex,
    pr_link: Regex,
    version_token: Regex,
    changelog_file_name: String,
    changelog_stem: String,
    skip_label: String,
    unreleased_marker: String,
    stable_heading_prefix: String,
}

impl Patterns {
    /// Compile patterns from config.
    ///
    /// Configured literals are regex-escaped before they are spliced into a
    /// pattern, so a config value can never change a pattern's structure.
    ///
    /// # Returns
    ///
    /// * `Ok(Patterns)` - Successfully compiled patterns
    /// * `Err(CheckError::UserError)` - A pattern failed to compile
    pub fn from_config(config: &Config) -> Result<Self> {
        let file = regex::escape(&config.changelog_file_name);
        let changelog_header = compile(
            "changelog diff header",
            &format!(r"(?m)^(\s*)diff --git a(.*)/{file} b(.*)/{file}"),
        )?;
        let hunk_header = compile("hunk header", r"(?m)^(\s*)@@(.*)@@")?;
        let pr_link = compile(
            "pull request link",
            &format!(
                r"\[#\d+\]\(https://github\.com/{}/pull/\d+\)",
                regex::escape(&config.repository)
            ),
        )?;
        let version_token = compile("version token", r"^[0-9]+\.[0-9]+\.[0-9]+$")?;

        Ok(Self {
            changelog_header,
            hunk_header,
            pr_link,
            version_token,
            changelog_file_name: config.changelog_file_name.clone(),
            changelog_stem: config.changelog_stem().to_string(),
            skip_label: config.skip_label.clone(),
            unreleased_marker: config.unreleased_marker.clone(),
            stable_heading_prefix: config.stable_heading_prefix.clone(),
        })
    }

    /// Line-anchored `diff --git a…/<file> b…/<file>` header for the changelog.
    pub fn changelog_header(&self) -> &Regex {
        &self.changelog_header
    }

    /// Line-anchored `@@ … @@` hunk header.
    pub fn hunk_header(&self) -> &Regex {
        &self.hunk_header
    }

    /// `[#<n>](https://github.com/<owner>/<name>/pull/<n>)`.
    pub fn pr_link(&self) -> &Regex {
        &self.pr_link
    }

    /// Whether `token` is exactly `major.minor.patch`.
    pub fn is_stable_version(&self, token: &str) -> bool {
        self.version_token.is_match(token)
    }

    pub fn changelog_file_name(&self) -> &str {
        &self.changelog_file_name
    }

    /// File name without extension, e.g. `CHANGELOG`.
    pub fn changelog_stem(&self) -> &str {
        &self.changelog_stem
    }

    pub fn skip_label(&self) -> &str {
        &self.skip_label
    }

    pub fn unreleased_marker(&self) -> &str {
        &self.unreleased_marker
    }

    pub fn stable_heading_prefix(&self) -> &str {
        &self.stable_heading_prefix
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        CheckError::UserError(format!(
            "invalid {} pattern '{}': {}\n\
             Fix: check the values in your changelog-check config.",
            name, pattern, e
        ))
    })
}
