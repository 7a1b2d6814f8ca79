//! Implementation of the `changelog-check config` command.

use crate::cli::ConfigArgs;
use crate::error::Result;

use super::load_config;

/// Print the effective configuration as YAML.
pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
