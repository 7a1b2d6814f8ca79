//! Tests for changelog structure parsing.

use crate::config::Config;
use crate::error::CheckError;
use crate::patterns::Patterns;

use super::sections::is_section_heading;
use super::{extract_stable_versions, extract_unreleased_group, group_by_versions, parse_sections};

fn patterns() -> Patterns {
    Patterns::from_config(&Config::default()).unwrap()
}

const CHANGELOG: &str = "# Changelog for the Mapbox Navigation SDK for Android

Mapbox welcomes participation and contributions from everyone.

## Unreleased
#### Features
- Added route refresh [#6001](https://github.com/mapbox/mapbox-navigation-android/pull/6001)
#### Bug fixes and improvements

## Mapbox Navigation SDK 2.1.0 - January 12, 2022
### Changelog
#### Bug fixes and improvements
- Fixed crash [#5001](https://github.com/mapbox/mapbox-navigation-android/pull/5001)

## Mapbox Navigation SDK 2.1.0-beta.1 - December 1, 2021
- Beta entry [#4900](https://github.com/mapbox/mapbox-navigation-android/pull/4900)

## Mapbox Navigation SDK 2.0.0 - October 5, 2021
- Initial release [#4000](https://github.com/mapbox/mapbox-navigation-android/pull/4000)
";

// =========================================================================
// Heading detection
// =========================================================================

#[test]
fn test_heading_detection() {
    assert!(is_section_heading("## Unreleased"));
    assert!(is_section_heading("##Unreleased"));
    assert!(is_section_heading("## "));

    assert!(!is_section_heading("##"));
    assert!(!is_section_heading("# Changelog"));
    assert!(!is_section_heading("### Changelog"));
    assert!(!is_section_heading("#### Features"));
    assert!(!is_section_heading(" ## Indented"));
    assert!(!is_section_heading("- ## not a heading"));
}

// =========================================================================
// Grouping
// =========================================================================

#[test]
fn test_group_by_versions_keys_sections_by_heading() {
    let sections = parse_sections(CHANGELOG);

    let headings: Vec<&str> = sections.headings().collect();
    assert_eq!(
        headings,
        vec![
            "## Unreleased",
            "## Mapbox Navigation SDK 2.1.0 - January 12, 2022",
            "## Mapbox Navigation SDK 2.1.0-beta.1 - December 1, 2021",
            "## Mapbox Navigation SDK 2.0.0 - October 5, 2021",
        ]
    );

    let unreleased = sections.get("## Unreleased").unwrap();
    assert_eq!(
        unreleased.lines,
        vec![
            "#### Features",
            "- Added route refresh [#6001](https://github.com/mapbox/mapbox-navigation-android/pull/6001)",
            "#### Bug fixes and improvements",
        ]
    );
}

#[test]
fn test_deeper_headings_stay_inside_section() {
    let sections = parse_sections(CHANGELOG);
    let section = sections
        .get("## Mapbox Navigation SDK 2.1.0 - January 12, 2022")
        .unwrap();

    assert!(section.contains("### Changelog"));
    assert!(section.contains("#### Bug fixes and improvements"));
}

#[test]
fn test_content_before_first_heading_discarded() {
    let sections = parse_sections(CHANGELOG);

    for section in sections.iter() {
        assert!(!section.contains("Mapbox welcomes participation and contributions from everyone."));
        assert!(!section.contains("# Changelog for the Mapbox Navigation SDK for Android"));
    }
}

#[test]
fn test_blank_lines_dropped_and_lines_kept_verbatim() {
    let sections = group_by_versions(["## A", "", "   ", "  - indented  ", "- plain"]);

    let section = sections.get("## A").unwrap();
    assert_eq!(section.lines, vec!["  - indented  ", "- plain"]);
}

#[test]
fn test_heading_without_content_not_stored() {
    let sections = group_by_versions(["## Empty", "", "## Full", "- entry"]);

    assert_eq!(sections.len(), 1);
    assert!(sections.get("## Empty").is_none());
    assert!(sections.get("## Full").is_some());
}

#[test]
fn test_repeated_heading_last_write_wins() {
    let sections = group_by_versions([
        "## Unreleased",
        "- first",
        "## Other",
        "- other",
        "## Unreleased",
        "- second",
    ]);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections.get("## Unreleased").unwrap().lines, vec!["- second"]);
    // Position of the first occurrence is kept.
    assert_eq!(sections.headings().next(), Some("## Unreleased"));
}

#[test]
fn test_empty_content_yields_no_sections() {
    assert!(parse_sections("").is_empty());
    assert!(parse_sections("# Title only\n\nSome text\n").is_empty());
}

#[test]
fn test_grouping_is_idempotent() {
    assert_eq!(parse_sections(CHANGELOG), parse_sections(CHANGELOG));
}

#[test]
fn test_concatenated_sections_reconstructed() {
    let parts = [
        ("## Unreleased", vec!["- a", "- b"]),
        ("## Mapbox Navigation SDK 1.0.0 - x", vec!["- c"]),
    ];
    let content: String = parts
        .iter()
        .map(|(heading, lines)| format!("{}\n{}\n\n", heading, lines.join("\n")))
        .collect();

    let sections = parse_sections(&content);
    assert_eq!(sections.len(), parts.len());
    for (heading, lines) in &parts {
        assert_eq!(&sections.get(heading).unwrap().lines, lines);
    }
}

// =========================================================================
// Unreleased section
// =========================================================================

#[test]
fn test_extract_unreleased_group() {
    let sections = parse_sections(CHANGELOG);
    let unreleased = extract_unreleased_group(&sections, &patterns()).unwrap();

    assert_eq!(unreleased.heading, "## Unreleased");
}

#[test]
fn test_unreleased_marker_may_be_embedded() {
    let sections = group_by_versions(["## Mapbox Navigation SDK 3.0.0 (Unreleased)", "- entry"]);
    let unreleased = extract_unreleased_group(&sections, &patterns()).unwrap();

    assert_eq!(unreleased.lines, vec!["- entry"]);
}

#[test]
fn test_first_unreleased_heading_wins() {
    let sections = group_by_versions([
        "## Unreleased (core)",
        "- core",
        "## Unreleased (ui)",
        "- ui",
    ]);
    let unreleased = extract_unreleased_group(&sections, &patterns()).unwrap();

    assert_eq!(unreleased.heading, "## Unreleased (core)");
}

#[test]
fn test_missing_unreleased_section_fails() {
    let sections = group_by_versions(["## Mapbox Navigation SDK 2.0.0 - x", "- entry"]);
    let err = extract_unreleased_group(&sections, &patterns()).unwrap_err();

    assert!(matches!(err, CheckError::NoUnreleasedSection { .. }));
    assert_eq!(err.to_string(), "No 'Unreleased' section in CHANGELOG");
}

#[test]
fn test_empty_unreleased_section_is_missing() {
    let sections = group_by_versions(["## Unreleased", "", "## Mapbox Navigation SDK 2.0.0 - x", "- e"]);
    let err = extract_unreleased_group(&sections, &patterns()).unwrap_err();

    assert!(matches!(err, CheckError::NoUnreleasedSection { .. }));
}

// =========================================================================
// Stable versions
// =========================================================================

#[test]
fn test_extract_stable_versions() {
    let sections = parse_sections(CHANGELOG);
    let stable = extract_stable_versions(&sections, &patterns());

    let versions: Vec<&str> = stable.versions().collect();
    assert_eq!(versions, vec!["2.1.0", "2.0.0"]);
    assert!(stable.get("2.1.0-beta.1").is_none());
    assert!(
        stable
            .get("2.0.0")
            .unwrap()
            .contains("- Initial release [#4000](https://github.com/mapbox/mapbox-navigation-android/pull/4000)")
    );
}

#[test]
fn test_stable_heading_requires_trailing_space() {
    let sections = group_by_versions(["## Mapbox Navigation SDK 2.0.0", "- entry"]);
    let stable = extract_stable_versions(&sections, &patterns());

    assert!(stable.is_empty());
}

#[test]
fn test_stable_heading_requires_prefix() {
    let sections = group_by_versions(["## Navigation 2.0.0 - x", "- entry", "## 2.0.0 - y", "- e"]);
    let stable = extract_stable_versions(&sections, &patterns());

    assert!(stable.is_empty());
}

#[test]
fn test_find_containing_reports_first_matching_version() {
    let sections = group_by_versions([
        "## Mapbox Navigation SDK 2.1.0 - b",
        "- shared",
        "## Mapbox Navigation SDK 2.0.0 - a",
        "- shared",
        "- older",
    ]);
    let stable = extract_stable_versions(&sections, &patterns());

    assert_eq!(stable.len(), 2);
    assert_eq!(stable.find_containing("- shared"), Some("2.1.0"));
    assert_eq!(stable.find_containing("- older"), Some("2.0.0"));
    assert_eq!(stable.find_containing("- missing"), None);
}

#[test]
fn test_repeated_stable_version_last_section_wins() {
    let sections = group_by_versions([
        "## Mapbox Navigation SDK 2.0.0 - first",
        "- first",
        "## Mapbox Navigation SDK 2.0.0 - second",
        "- second",
    ]);
    let stable = extract_stable_versions(&sections, &patterns());

    assert_eq!(stable.len(), 1);
    assert_eq!(stable.get("2.0.0").unwrap().lines, vec!["- second"]);
}
