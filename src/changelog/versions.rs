//! Classifying sections into unreleased and stable versions.

use crate::error::{CheckError, Result};
use crate::patterns::Patterns;

use super::sections::{Section, VersionSections};

/// Stable version sections keyed by version string, in heading order.
#[derive(Debug, Clone, Default)]
pub struct StableVersions<'a> {
    versions: Vec<(String, &'a Section)>,
}

impl<'a> StableVersions<'a> {
    fn insert(&mut self, version: String, section: &'a Section) {
        match self.versions.iter_mut().find(|(v, _)| *v == version) {
            Some(existing) => existing.1 = section,
            None => self.versions.push((version, section)),
        }
    }

    pub fn get(&self, version: &str) -> Option<&'a Section> {
        self.versions
            .iter()
            .find(|(v, _)| v == version)
            .map(|(_, section)| *section)
    }

    /// First version whose section contains `line` verbatim.
    pub fn find_containing(&self, line: &str) -> Option<&str> {
        self.versions
            .iter()
            .find(|(_, section)| section.contains(line))
            .map(|(version, _)| version.as_str())
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|(v, _)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Find the section whose heading contains the unreleased marker.
///
/// The first matching heading in file order wins.
///
/// # Returns
///
/// * `Ok(&Section)` - The unreleased section
/// * `Err(CheckError::NoUnreleasedSection)` - No heading contains the marker
pub fn extract_unreleased_group<'a>(
    sections: &'a VersionSections,
    patterns: &Patterns,
) -> Result<&'a Section> {
    sections
        .iter()
        .find(|s| s.heading.contains(patterns.unreleased_marker()))
        .ok_or_else(|| CheckError::NoUnreleasedSection {
            marker: patterns.unreleased_marker().to_string(),
            changelog: patterns.changelog_stem().to_string(),
        })
}

/// Collect sections whose heading names a released `major.minor.patch` version.
///
/// The version token is the text between the stable heading prefix and the
/// next space. Headings without the prefix, without a space after the
/// token, or with a non-numeric token are skipped.
pub fn extract_stable_versions<'a>(
    sections: &'a VersionSections,
    patterns: &Patterns,
) -> StableVersions<'a> {
    let mut stable = StableVersions::default();

    for section in sections.iter() {
        if let Some(version) = stable_version_token(&section.heading, patterns) {
            stable.insert(version.to_string(), section);
        }
    }

    stable
}

fn stable_version_token<'h>(heading: &'h str, patterns: &Patterns) -> Option<&'h str> {
    let prefix = patterns.stable_heading_prefix();
    let start = heading.find(prefix)? + prefix.len();
    let after = &heading[start..];
    let token = &after[..after.find(' ')?];

    patterns.is_stable_version(token).then_some(token)
}
