//! Exit code constants for the changelog-check CLI.
//!
//! - 0: Success (passed or skipped)
//! - 1: User error (bad args, invalid config, unreadable input)
//! - 2: Validation failure (changelog entry rejected)
//! - 3: Source failure (pull request inputs could not be obtained)

/// Successful execution, including a skipped check.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or unreadable input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the changelog contribution was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Source failure: the collaborator could not supply an input.
pub const SOURCE_FAILURE: i32 = 3;
