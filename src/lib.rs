//! changelog-check: pull request changelog entry validation.
//!
//! The library is the pure checking engine plus its collaborator seam:
//! - [`diff`] slices the changelog's hunk out of a unified diff
//! - [`changelog`] groups changelog content into version sections
//! - [`validate`] holds the individual checks
//! - [`pipeline`] runs them in order against a [`source::PullRequestSource`]

pub mod changelog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod patterns;
pub mod pipeline;
pub mod source;
pub mod validate;
