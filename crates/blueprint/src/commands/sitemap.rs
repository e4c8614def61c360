//! Sitemap command.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

use blueprint_static::SitemapGenerator;

use super::config::SiteConfig;

/// Run the sitemap command.
pub fn run(config: &SiteConfig) -> Result<()> {
    let registry = config.registry()?;
    let build_date = today();

    SitemapGenerator::new(&config.base_url)
        .write(&registry, build_date, &config.public_dir)
        .context("Failed to write sitemap")?;

    Ok(())
}

/// Build date used for `<lastmod>`.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
