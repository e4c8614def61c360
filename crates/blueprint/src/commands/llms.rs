//! LLM feed command.

use anyhow::{Context, Result};

use blueprint_static::LlmsFeed;

use super::config::SiteConfig;

/// Run the llms command.
pub fn run(config: &SiteConfig) -> Result<()> {
    let registry = config.registry()?;

    LlmsFeed::new(&config.site_name, &config.base_url)
        .write(&registry, &config.public_dir)
        .context("Failed to write LLM feeds")?;

    Ok(())
}
