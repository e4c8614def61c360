//! Prerender driver.
//!
//! Renders every public route into a copy of the built `index.html` and writes
//! one file per route, so each page has meaningful markup and SEO head tags
//! before any client JavaScript runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use blueprint_render::ServerRenderer;
use blueprint_routes::RouteRegistry;

use crate::error::BuildError;
use crate::output::write_file;
use crate::template::HtmlTemplate;

/// Where the prerender driver reads and writes.
#[derive(Debug, Clone)]
pub struct PrerenderConfig {
    /// Built HTML template; overwritten by the root route
    pub template_path: PathBuf,

    /// Root directory that nested route files are written under
    pub output_dir: PathBuf,
}

impl PrerenderConfig {
    /// Config for a dist directory whose `index.html` is the template.
    pub fn for_dist(dist_dir: impl Into<PathBuf>) -> Self {
        let output_dir = dist_dir.into();
        Self {
            template_path: output_dir.join("index.html"),
            output_dir,
        }
    }
}

/// A file written for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerenderedPage {
    pub route: String,
    pub output_path: PathBuf,
}

/// Result of a prerender run.
#[derive(Debug)]
pub struct PrerenderReport {
    /// Pages written, in registry order
    pub pages: Vec<PrerenderedPage>,

    /// Total time in milliseconds
    pub duration_ms: u64,
}

/// Writes one prerendered HTML file per unique public route.
pub struct Prerenderer<'a> {
    config: PrerenderConfig,
    renderer: &'a ServerRenderer,
}

impl<'a> Prerenderer<'a> {
    pub fn new(config: PrerenderConfig, renderer: &'a ServerRenderer) -> Self {
        Self { config, renderer }
    }

    /// Prerender every unique normalized route of the registry.
    ///
    /// The template, the page component of every route and every output path
    /// are validated before the first file is written. After that, the first render or write failure aborts
    /// the remaining routes.
    pub fn run(&self, registry: &RouteRegistry) -> Result<PrerenderReport, BuildError> {
        let start = Instant::now();

        let template = self.load_template()?;

        let plan: Vec<PrerenderedPage> = registry
            .unique_paths()
            .into_iter()
            .map(|route| {
                if self.renderer.switch().resolve(&route).is_none() {
                    return Err(BuildError::MissingComponent(route));
                }
                let output_path = self.output_path(&route)?;
                Ok(PrerenderedPage { route, output_path })
            })
            .collect::<Result<_, BuildError>>()?;

        tracing::info!("Prerendering {} routes", plan.len());

        for page in &plan {
            let rendered = self
                .renderer
                .render(&page.route)
                .map_err(|source| BuildError::Render {
                    route: page.route.clone(),
                    source,
                })?;

            let html = template.fill(&rendered.head, &rendered.html);
            write_file(&page.output_path, &html)?;

            tracing::info!("{} -> {}", page.route, page.output_path.display());
        }

        Ok(PrerenderReport {
            pages: plan,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn load_template(&self) -> Result<HtmlTemplate, BuildError> {
        let path = &self.config.template_path;

        if !path.is_file() {
            return Err(BuildError::TemplateNotFound(path.clone()));
        }

        let source = fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.clone(),
            source,
        })?;

        HtmlTemplate::parse(&source).map_err(|source| BuildError::Template {
            path: path.clone(),
            source,
        })
    }

    /// `/` maps to the template itself; `/a/b` maps to `<output>/a/b/index.html`.
    pub fn output_path(&self, route: &str) -> Result<PathBuf, BuildError> {
        if route == "/" {
            return Ok(self.config.template_path.clone());
        }

        let relative = route
            .strip_prefix('/')
            .ok_or_else(|| BuildError::InvalidRoutePath(route.to_string()))?;

        let mut path = self.config.output_dir.clone();
        for segment in relative.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(BuildError::InvalidRoutePath(route.to_string()));
            }
            path.push(segment);
        }
        path.push("index.html");

        Ok(path)
    }
}

/// Convenience wrapper: prerender `registry` into `dist_dir`.
pub fn prerender_dist(
    dist_dir: &Path,
    renderer: &ServerRenderer,
    registry: &RouteRegistry,
) -> Result<PrerenderReport, BuildError> {
    Prerenderer::new(PrerenderConfig::for_dist(dist_dir), renderer).run(registry)
}
