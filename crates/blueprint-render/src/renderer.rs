//! Server renderer: URL in, `{ html, head }` out.

use blueprint_routes::{site, RouteRegistry};

use crate::context::{Chrome, SiteLinks, Viewer};
use crate::head::{HeadCollector, HeadTag};
use crate::location::Location;
use crate::pages::{PageCx, PageId};
use crate::switch::RouteSwitch;
use crate::templates::TemplateEngine;

/// Site-wide values the renderer closes over.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Display name used in titles and the header
    pub site_name: String,

    /// Origin used for canonical and Open Graph URLs
    pub base_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: site::SITE_NAME.to_string(),
            base_url: site::BASE_URL.to_string(),
        }
    }
}

/// Result of rendering one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Page markup wrapped in the site layout
    pub html: String,

    /// Serialized head tags
    pub head: String,
}

/// Errors that can occur while building the renderer or rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("No page component registered for route {0}")]
    MissingComponent(String),

    #[error("Alias {alias} points at {target}, which is not a registered route")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to serialize structured data: {0}")]
    StructuredData(#[from] serde_json::Error),
}

/// Renders pages to strings in a single synchronous pass.
///
/// Page components only read data that is available up front (the registry,
/// compiled-in copy and the catalog). Output is a pure function of the URL,
/// the viewer and the values captured at construction.
pub struct ServerRenderer {
    switch: RouteSwitch,
    links: SiteLinks,
    templates: TemplateEngine,
    options: RenderOptions,
}

impl ServerRenderer {
    /// Create a renderer for a registry. Fails if any registered route or
    /// alias lacks a page component.
    pub fn new(registry: &RouteRegistry, options: RenderOptions) -> Result<Self, RenderError> {
        Ok(Self {
            switch: RouteSwitch::from_registry(registry)?,
            links: SiteLinks::from_registry(registry),
            templates: TemplateEngine::new()?,
            options,
        })
    }

    /// The route switch this renderer matches against.
    pub fn switch(&self) -> &RouteSwitch {
        &self.switch
    }

    /// Render a URL for an anonymous visitor, as the build does.
    pub fn render(&self, url: &str) -> Result<RenderOutput, RenderError> {
        self.render_as(url, &Viewer::Anonymous)
    }

    /// Render a URL for the given viewer.
    ///
    /// Unmatched URLs render the not-found page and still return `Ok`.
    pub fn render_as(&self, url: &str, viewer: &Viewer) -> Result<RenderOutput, RenderError> {
        let location = Location::parse(url);
        let matched = self.switch.resolve(&location.pathname);

        let (page, route) = match matched {
            Some(r) => (r.page, Some(&r.canonical)),
            None => (PageId::NotFound, None),
        };

        tracing::debug!(url, page = ?page, "Rendering");

        let chrome = Chrome::new(
            &self.options.site_name,
            &self.links,
            matched.map(|r| r.alias_for.as_deref().unwrap_or(r.path.as_str())),
            viewer,
        );

        let mut head = HeadCollector::new();
        head.extend(self.layout_head());

        let html = page.render(&mut PageCx {
            templates: &self.templates,
            switch: &self.switch,
            head: &mut head,
            chrome: &chrome,
            options: &self.options,
            location: &location,
            route,
        })?;

        Ok(RenderOutput {
            html,
            head: head.drain(),
        })
    }

    /// Defaults from the layout; pages override title and description.
    fn layout_head(&self) -> Vec<HeadTag> {
        vec![
            HeadTag::title(self.options.site_name.clone()),
            HeadTag::meta_property("og:site_name", self.options.site_name.clone()),
            HeadTag::meta_name("theme-color", "#0b1220"),
            HeadTag::noscript("<style>.js-only{display:none}</style>"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_routes::{ChangeFrequency, RouteEntry};
    use pretty_assertions::assert_eq;

    fn renderer() -> ServerRenderer {
        ServerRenderer::new(&site::registry(), RenderOptions::default()).unwrap()
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = renderer();

        for route in site::registry().routes() {
            let first = renderer.render(&route.path).unwrap();
            let second = renderer.render(&route.path).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn separate_renderers_agree() {
        let a = renderer().render("/pricing").unwrap();
        let b = renderer().render("/pricing").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn renders_home_with_seo_head() {
        let out = renderer().render("/").unwrap();

        assert!(out.html.contains("Real places, simulation-ready."));
        assert!(out.html.contains("class=\"site-header\""));
        assert!(out.html.contains("class=\"site-footer\""));
        assert!(out.head.starts_with("<title>Blueprint | "));
        assert_eq!(out.head.matches("<title>").count(), 1);
        assert!(out.head.contains("<link rel=\"canonical\" href=\"https://tryblueprint.io/\">"));
        assert!(out.head.contains("application/ld+json"));
        assert!(out.head.contains("<noscript>"));
    }

    #[test]
    fn alias_renders_same_html_as_canonical() {
        let renderer = renderer();

        let alias = renderer.render("/environments").unwrap();
        let canonical = renderer.render("/marketplace").unwrap();

        assert_eq!(alias.html, canonical.html);
        assert!(alias.head.contains("href=\"https://tryblueprint.io/marketplace\""));
    }

    #[test]
    fn unknown_url_falls_through_to_not_found() {
        let out = renderer().render("/does-not-exist").unwrap();

        assert!(out.html.contains("Page not found"));
        assert!(out.html.contains("does-not-exist"));
        assert!(out.head.contains("<meta name=\"robots\" content=\"noindex\">"));
        assert!(!out.head.contains("rel=\"canonical\""));
    }

    #[test]
    fn query_and_trailing_slash_do_not_change_match() {
        let renderer = renderer();

        let plain = renderer.render("/pricing").unwrap();
        let decorated = renderer.render("/pricing/?ref=nav#plans").unwrap();

        assert_eq!(plain, decorated);
    }

    #[test]
    fn nested_route_highlights_section() {
        let out = renderer().render("/marketplace/scenes").unwrap();

        assert_eq!(out.html.matches("aria-current=\"page\"").count(), 1);
        assert!(out
            .html
            .contains("aria-current=\"page\" class=\"active\">Marketplace</a>"));
        assert!(out.html.contains("Galley Kitchen"));
        assert!(!out.html.contains("Tabletop Grasping 50k"));
    }

    #[test]
    fn signed_in_viewer_changes_account_links() {
        let viewer = Viewer::SignedIn {
            display_name: "Ada".to_string(),
        };

        let out = renderer().render_as("/pricing", &viewer).unwrap();

        assert!(out.html.contains(">Ada</a>"));
        assert!(!out.html.contains("Sign in"));
    }

    #[test]
    fn page_links_follow_the_registry() {
        let registry = RouteRegistry::new(
            vec![
                RouteEntry::new("/", "Home", "Landing", ChangeFrequency::Weekly, 1.0),
                RouteEntry::new("/pricing", "Pricing", "Plans", ChangeFrequency::Monthly, 0.8),
            ],
            vec![],
            vec![],
        );
        let renderer = ServerRenderer::new(&registry, RenderOptions::default()).unwrap();

        let home = renderer.render("/").unwrap();
        let pricing = renderer.render("/pricing").unwrap();

        assert!(!home.html.contains("Explore the marketplace"));
        assert!(!home.html.contains("Request a custom scene"));
        assert!(!home.html.contains("Learn more"));
        assert!(!pricing.html.contains("Browse scenes"));
        assert!(!pricing.html.contains("Contact sales"));
        assert!(pricing.html.contains("Custom capture"));
    }

    #[test]
    fn page_links_present_for_full_site() {
        let renderer = renderer();

        let home = renderer.render("/").unwrap();
        let pricing = renderer.render("/pricing").unwrap();

        assert!(home.html.contains("Request a custom scene"));
        assert!(home.html.contains("Learn more"));
        assert!(pricing.html.contains("Contact sales"));
        assert_eq!(pricing.html.matches("class=\"button\">Browse").count(), 2);
    }

    #[test]
    fn construction_fails_for_unmapped_route() {
        let registry = RouteRegistry::new(
            vec![RouteEntry::new(
                "/webinars",
                "Webinars",
                "Talks",
                ChangeFrequency::Monthly,
                0.4,
            )],
            vec![],
            vec![],
        );

        let result = ServerRenderer::new(&registry, RenderOptions::default());

        assert!(matches!(result, Err(RenderError::MissingComponent(_))));
    }
}
