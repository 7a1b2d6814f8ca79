//! Configuration model for changelog-check.
//!
//! This module defines the Config struct that represents an optional
//! `changelog-check.yaml`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults matching the navigation SDK
//! changelog conventions, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
