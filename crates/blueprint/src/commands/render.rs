//! Render a single URL to stdout.

use anyhow::{Context, Result};

use super::config::SiteConfig;

/// Run the render command.
pub fn run(config: &SiteConfig, url: &str) -> Result<()> {
    let registry = config.registry()?;
    let renderer = config.renderer(&registry)?;

    let output = renderer
        .render(url)
        .with_context(|| format!("Failed to render {}", url))?;

    println!("<!-- head -->\n{}\n\n<!-- html -->\n{}", output.head, output.html);

    Ok(())
}
