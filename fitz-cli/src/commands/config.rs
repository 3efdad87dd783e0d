use std::fs;

use anyhow::{Context as _, Result};
use shared::config::{ClientConfig, ConfigFormat};

/// Writes a default configuration file into the working directory.
///
/// # Errors
/// Unsupported formats and write failures.
pub fn generate_config(format: &str) -> Result<()> {
    let format: ConfigFormat = format.parse()?;
    let file_name = format.file_name();
    let rendered = ClientConfig::with_defaults().render(format)?;

    fs::write(file_name, rendered)
        .with_context(|| format!("failed to write configuration file {file_name}"))?;

    println!("Configuration file '{file_name}' generated successfully.");
    Ok(())
}
