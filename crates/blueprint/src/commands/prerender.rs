//! Prerender command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use blueprint_static::{PrerenderConfig, Prerenderer};

use super::config::SiteConfig;

/// Run the prerender command.
///
/// `--output` alone moves both the template and the output root, matching a
/// client build written somewhere other than the configured dist directory.
pub fn run(config: &SiteConfig, template: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let prerender_config = match (template, output) {
        (Some(template_path), Some(output_dir)) => PrerenderConfig {
            template_path,
            output_dir,
        },
        (None, Some(output_dir)) => PrerenderConfig::for_dist(output_dir),
        (Some(template_path), None) => PrerenderConfig {
            template_path,
            output_dir: config.dist_dir.clone(),
        },
        (None, None) => PrerenderConfig {
            template_path: config.template_path.clone(),
            output_dir: config.dist_dir.clone(),
        },
    };

    let registry = config.registry()?;
    let renderer = config.renderer(&registry)?;

    tracing::info!(
        "Prerendering into {} using {}",
        prerender_config.output_dir.display(),
        prerender_config.template_path.display()
    );

    let report = Prerenderer::new(prerender_config, &renderer)
        .run(&registry)
        .context("Prerender failed")?;

    tracing::info!(
        "Prerendered {} pages in {}ms",
        report.pages.len(),
        report.duration_ms
    );

    Ok(())
}
