//! Changelog structure parsing.
//!
//! Splits full changelog content into sections keyed by their second-level
//! heading, then classifies headings:
//! - the unreleased section (heading contains the unreleased marker)
//! - stable version sections (`<prefix><major.minor.patch> …` headings)
//!
//! Only heading detection is performed; entry prose is kept verbatim.

mod sections;
mod versions;

#[cfg(test)]
mod tests;

// Re-export public API
pub use sections::{Section, VersionSections, group_by_versions, parse_sections};
pub use versions::{StableVersions, extract_stable_versions, extract_unreleased_group};
