//! Implementation of the `changelog-check check` command.
//!
//! # Steps
//!
//! 1. Load config (or defaults) and compile patterns
//! 2. Read inputs through a [`LocalSource`]
//! 3. Run the check pipeline
//! 4. Print the outcome (text or JSON report)
//!
//! A failed check is returned as the error so `main` can map it to an exit
//! code; in JSON mode the report is printed to stdout first.

use tracing::warn;

use crate::cli::{CheckArgs, OutputFormat};
use crate::error::Result;
use crate::patterns::Patterns;
use crate::pipeline::{CheckReport, run_checks};
use crate::source::LocalSource;

use super::load_config;

/// Execute the `changelog-check check` command.
///
/// # Exit Codes
///
/// - 0: Checks passed or were skipped
/// - 1: User error (invalid config)
/// - 2: Validation failure (changelog entry rejected)
/// - 3: Source failure (inputs unreadable or malformed)
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let patterns = Patterns::from_config(&config)?;

    let source = LocalSource::new(args.pull_request, args.files, args.diff, args.workspace);
    let result = run_checks(&source, &patterns);

    if let Err(err) = &result {
        warn!(kind = ?err.kind(), "changelog check failed");
    }

    match args.format {
        OutputFormat::Text => {
            if let Ok(outcome) = &result {
                println!("{}", outcome.message());
            }
        }
        OutputFormat::Json => {
            println!("{}", CheckReport::from_result(&result).to_json()?);
        }
    }

    result.map(|_| ())
}
