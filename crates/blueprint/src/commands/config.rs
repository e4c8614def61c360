//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use blueprint_render::{RenderOptions, ServerRenderer};
use blueprint_routes::{site, RouteRegistry};

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    paths: PathsSection,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_base_url")]
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PathsSection {
    #[serde(default = "default_public_dir")]
    public_dir: String,
    #[serde(default = "default_dist_dir")]
    dist_dir: String,
    /// Built HTML template, defaults to `<dist_dir>/index.html`
    template: Option<String>,
    /// TOML route registry replacing the compiled-in one
    routes: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
        }
    }
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            dist_dir: default_dist_dir(),
            template: None,
            routes: None,
        }
    }
}

fn default_name() -> String {
    site::SITE_NAME.to_string()
}
fn default_base_url() -> String {
    site::BASE_URL.to_string()
}
fn default_public_dir() -> String {
    "client/public".to_string()
}
fn default_dist_dir() -> String {
    "dist/public".to_string()
}

/// Resolved settings for every command.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_name: String,
    pub base_url: String,
    /// Where sitemap, robots and LLM feeds are written
    pub public_dir: PathBuf,
    /// Client build output that prerendered pages are written into
    pub dist_dir: PathBuf,
    pub template_path: PathBuf,
    pub routes_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Load configuration from `path` if it exists, otherwise use defaults.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file: ConfigFile = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            file
        } else {
            tracing::debug!("No {} found, using defaults", path.display());
            ConfigFile::default()
        };

        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        let dist_dir = PathBuf::from(&file.paths.dist_dir);
        let template_path = file
            .paths
            .template
            .map(PathBuf::from)
            .unwrap_or_else(|| dist_dir.join("index.html"));

        Self {
            site_name: file.site.name,
            base_url: file.site.base_url,
            public_dir: PathBuf::from(&file.paths.public_dir),
            dist_dir,
            template_path,
            routes_path: file.paths.routes.map(PathBuf::from),
        }
    }

    /// The route registry: the configured TOML file, or the compiled-in one.
    pub fn registry(&self) -> Result<RouteRegistry> {
        match &self.routes_path {
            Some(path) => {
                let registry = RouteRegistry::load(path)?;
                tracing::info!(
                    "Loaded {} routes from {}",
                    registry.routes().len(),
                    path.display()
                );
                Ok(registry)
            }
            None => Ok(site::registry()),
        }
    }

    /// A server renderer for `registry` with this site's options.
    pub fn renderer(&self, registry: &RouteRegistry) -> Result<ServerRenderer> {
        let options = RenderOptions {
            site_name: self.site_name.clone(),
            base_url: self.base_url.clone(),
        };
        ServerRenderer::new(registry, options).context("Route registry is inconsistent")
    }
}
