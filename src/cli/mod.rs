//! CLI argument parsing for changelog-check.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// changelog-check: validate a pull request's changelog entry before merge.
///
/// Requires a changelog entry (unless the pull request carries the skip
/// label), a link to the pull request in every added entry, and placement
/// of new entries in the Unreleased section only.
#[derive(Parser, Debug)]
#[command(name = "changelog-check")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for changelog-check.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a pull request's changelog contribution.
    ///
    /// Reads saved pull request API responses, the pull request diff, and
    /// the changelog from a checkout of the head commit.
    Check(CheckArgs),

    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
}

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Single human-readable line.
    #[default]
    Text,
    /// JSON report.
    Json,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Pull request JSON (`GET /repos/{owner}/{repo}/pulls/{number}`).
    #[arg(long)]
    pub pull_request: PathBuf,

    /// Pull request files JSON (`GET /repos/{owner}/{repo}/pulls/{number}/files`).
    #[arg(long)]
    pub files: PathBuf,

    /// Unified diff of the pull request.
    #[arg(long)]
    pub diff: PathBuf,

    /// Checkout of the pull request's head commit.
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Optional YAML config overriding the defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Optional YAML config overriding the defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_with_defaults() {
        let cli = Cli::try_parse_from([
            "changelog-check",
            "check",
            "--pull-request",
            "pr.json",
            "--files",
            "files.json",
            "--diff",
            "pr.diff",
        ])
        .unwrap();

        assert!(!cli.verbose);
        if let Command::Check(args) = cli.command {
            assert_eq!(args.pull_request, PathBuf::from("pr.json"));
            assert_eq!(args.files, PathBuf::from("files.json"));
            assert_eq!(args.diff, PathBuf::from("pr.diff"));
            assert_eq!(args.workspace, PathBuf::from("."));
            assert!(args.config.is_none());
            assert_eq!(args.format, OutputFormat::Text);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_json_verbose() {
        let cli = Cli::try_parse_from([
            "changelog-check",
            "check",
            "--pull-request",
            "pr.json",
            "--files",
            "files.json",
            "--diff",
            "pr.diff",
            "--workspace",
            "checkout",
            "--config",
            "changelog-check.yaml",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        if let Command::Check(args) = cli.command {
            assert_eq!(args.workspace, PathBuf::from("checkout"));
            assert_eq!(args.config, Some(PathBuf::from("changelog-check.yaml")));
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_requires_inputs() {
        let result = Cli::try_parse_from(["changelog-check", "check", "--diff", "pr.diff"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["changelog-check", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigArgs { config: None })));
    }
}
