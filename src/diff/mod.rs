//! Diff slicing for changelog checks.
//!
//! Isolates the changelog file's region inside a multi-file unified diff
//! and extracts the lines it adds:
//! - Locate the `diff --git a…/CHANGELOG.md b…/CHANGELOG.md` header
//! - Skip file metadata up to the first `@@ … @@` hunk header
//! - Stop at the next `diff --git` marker (or end of text)
//! - Keep only `+` lines, in order, duplicates preserved
//!
//! Every function is a pure transformation of the diff text; locating and
//! extracting can be called independently on the same input.

mod slicer;


// Re-export public API
pub use slicer::{extract_added_lines, has_changelog_diff, locate_changelog_hunk};
