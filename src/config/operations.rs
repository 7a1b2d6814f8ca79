//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{CheckError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Empty input means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CheckError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CheckError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every string field must be non-empty
    /// - `changelog_file_name` is a bare file name (no `/`)
    /// - `repository` has the form `owner/name`
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("changelog_file_name", &self.changelog_file_name),
            ("skip_label", &self.skip_label),
            ("repository", &self.repository),
            ("unreleased_marker", &self.unreleased_marker),
            ("stable_heading_prefix", &self.stable_heading_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CheckError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
        }

        if self.changelog_file_name.contains('/') {
            return Err(CheckError::UserError(format!(
                "config validation failed: changelog_file_name must be a file name, not a path (found '{}')",
                self.changelog_file_name
            )));
        }

        let valid_repository = matches!(
            self.repository.split_once('/'),
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
        );
        if !valid_repository {
            return Err(CheckError::UserError(format!(
                "config validation failed: repository must look like 'owner/name' (found '{}')",
                self.repository
            )));
        }

        Ok(())
    }

    /// Changelog file name without its extension, as used in messages.
    pub fn changelog_stem(&self) -> &str {
        self.changelog_file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(&self.changelog_file_name)
    }
}
