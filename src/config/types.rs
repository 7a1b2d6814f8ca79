//! Default value functions used by the Config struct.

/// Default changelog file name, matched against diff headers and PR files.
pub fn default_changelog_file_name() -> String {
    "CHANGELOG.md".to_string()
}

/// Default label that exempts a pull request from the changelog check.
pub fn default_skip_label() -> String {
    "skip changelog".to_string()
}

/// Default `owner/name` of the hosted repository PR links must point at.
pub fn default_repository() -> String {
    "mapbox/mapbox-navigation-android".to_string()
}

/// Default word identifying the unreleased section heading.
pub fn default_unreleased_marker() -> String {
    "Unreleased".to_string()
}

/// Default lead-in that precedes the version token in stable headings.
pub fn default_stable_heading_prefix() -> String {
    "Mapbox Navigation SDK ".to_string()
}
