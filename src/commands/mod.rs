//! Command implementations for changelog-check.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod config_cmd;


use std::path::Path;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Config(args) => config_cmd::cmd_config(args),
    }
}

/// Load the config at `path`, or the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
