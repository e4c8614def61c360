//! Full static generation: feeds first, then prerendered pages.

use anyhow::Result;

use super::config::SiteConfig;

/// Run the build command.
pub fn run(config: &SiteConfig) -> Result<()> {
    super::sitemap::run(config)?;
    super::llms::run(config)?;
    super::prerender::run(config, None, None)?;

    tracing::info!("Build complete");

    Ok(())
}
