//! changelog-check: validate a pull request's changelog entry before merge.
//!
//! This is the main entry point for the `changelog-check` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

use std::process::ExitCode;

use changelog_check::cli::Cli;
use changelog_check::{commands, exit_codes, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_tracing(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Validation failures are surfaced verbatim on the pull request.
            if err.is_validation_failure() {
                eprintln!("{}", err);
            } else {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
