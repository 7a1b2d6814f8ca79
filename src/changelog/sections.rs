//! Grouping changelog lines into heading-keyed sections.

/// Lines between one `## ` heading and the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The full heading line, e.g. `## Unreleased`.
    pub heading: String,
    /// Non-blank lines, verbatim, in file order.
    pub lines: Vec<String>,
}

impl Section {
    /// Whether `line` appears verbatim in this section.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

/// Sections keyed by heading text, in order of first appearance.
///
/// Inserting a heading that is already present replaces that section's
/// lines in place: the last occurrence wins, the first position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSections {
    sections: Vec<Section>,
}

impl VersionSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, replacing any section with the same heading.
    pub fn insert(&mut self, section: Section) {
        match self
            .sections
            .iter_mut()
            .find(|existing| existing.heading == section.heading)
        {
            Some(existing) => existing.lines = section.lines,
            None => self.sections.push(section),
        }
    }

    pub fn get(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.heading.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Whether `line` is a second-level heading (`##` not followed by `#`).
pub(super) fn is_section_heading(line: &str) -> bool {
    line.len() > 2 && line.starts_with("##") && !line[2..].starts_with('#')
}

/// Group changelog lines into sections keyed by heading.
///
/// Blank lines are dropped. Lines before the first heading have nothing to
/// be attributed to and are discarded, as are headings with no content.
///
/// # Example
///
/// ```
/// use changelog_check::changelog::group_by_versions;
///
/// let sections = group_by_versions(["# Changelog", "## Unreleased", "", "- Fix"]);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections.get("## Unreleased").unwrap().lines, vec!["- Fix"]);
/// ```
pub fn group_by_versions<'a, I>(lines: I) -> VersionSections
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sections = VersionSections::new();
    let mut heading = String::new();
    let mut buffered: Vec<String> = Vec::new();

    for line in lines {
        if is_section_heading(line) {
            if !buffered.is_empty() {
                commit(&mut sections, &heading, std::mem::take(&mut buffered));
            }
            heading = line.to_string();
        } else if !line.trim().is_empty() {
            buffered.push(line.to_string());
        }
    }

    if !buffered.is_empty() {
        commit(&mut sections, &heading, buffered);
    }

    sections
}

/// Split full changelog content on `\n` and group it into sections.
pub fn parse_sections(content: &str) -> VersionSections {
    group_by_versions(content.split('\n'))
}

fn commit(sections: &mut VersionSections, heading: &str, lines: Vec<String>) {
    if heading.trim().is_empty() {
        return;
    }
    sections.insert(Section {
        heading: heading.to_string(),
        lines,
    });
}
