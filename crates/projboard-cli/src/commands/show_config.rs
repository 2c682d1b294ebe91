//! Print the effective configuration.

use anyhow::{Context, Result};
use projboard_core::BoardConfig;

pub fn execute(config: &BoardConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render board config")?;
    print!("{}", rendered);
    Ok(())
}
