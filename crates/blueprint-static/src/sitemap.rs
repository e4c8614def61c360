//! Sitemap and robots.txt generation.

use std::path::Path;

use chrono::NaiveDate;

use blueprint_routes::{absolute_url, RouteRegistry};

use crate::error::BuildError;
use crate::output::write_file;

/// XML namespace of the sitemap protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Generates `sitemap.xml` and `robots.txt` from the registry.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    base_url: String,
}

impl SitemapGenerator {
    /// Create a generator for the given origin. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Render the sitemap. Entries follow registry order; aliases and
    /// exclusions are not listed.
    pub fn generate(&self, registry: &RouteRegistry, build_date: NaiveDate) -> String {
        let lastmod = build_date.format("%Y-%m-%d").to_string();

        let urls: Vec<String> = registry
            .routes()
            .iter()
            .map(|route| {
                format!(
                    "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
                    escape_xml(&absolute_url(&self.base_url, &route.path)),
                    lastmod,
                    route.change_frequency,
                    format_priority(route.priority)
                )
            })
            .collect();

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{}\">\n{}\n</urlset>\n",
            SITEMAP_NAMESPACE,
            urls.join("\n")
        )
    }

    /// Render robots.txt: allow everything except excluded routes and point
    /// crawlers at the sitemap.
    pub fn generate_robots(&self, registry: &RouteRegistry) -> String {
        let mut robots = String::from("User-agent: *\nAllow: /\n");
        for excluded in registry.excluded() {
            robots.push_str(&format!("Disallow: {}\n", excluded.path));
        }
        robots.push_str(&format!("\nSitemap: {}/sitemap.xml\n", self.base_url));
        robots
    }

    /// Write `sitemap.xml` and `robots.txt` into `public_dir`, overwriting
    /// existing files.
    pub fn write(
        &self,
        registry: &RouteRegistry,
        build_date: NaiveDate,
        public_dir: &Path,
    ) -> Result<(), BuildError> {
        let sitemap_path = public_dir.join("sitemap.xml");
        write_file(&sitemap_path, &self.generate(registry, build_date))?;
        tracing::info!(
            "Wrote {} ({} urls)",
            sitemap_path.display(),
            registry.routes().len()
        );

        let robots_path = public_dir.join("robots.txt");
        write_file(&robots_path, &self.generate_robots(registry))?;
        tracing::info!("Wrote {}", robots_path.display());

        Ok(())
    }
}

/// One decimal place. Exact ties (0.25, 0.75, ...) round away from zero;
/// every other value rounds from its exact binary expansion.
fn format_priority(priority: f64) -> String {
    let quarters = priority * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (priority * 10.0).round() / 10.0);
    }
    format!("{:.1}", priority)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
