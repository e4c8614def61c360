//! Render context shared by every page: the viewer and the site chrome.

use serde::Serialize;

use blueprint_routes::{normalize_path, RouteRegistry};

/// Paths shown in the header navigation, when registered.
const HEADER_PATHS: &[&str] = &["/marketplace", "/how-it-works", "/solutions", "/pricing", "/about"];

/// Paths shown in the footer, when registered.
const FOOTER_PATHS: &[&str] = &["/careers", "/contact", "/privacy", "/terms"];

/// The signed-in state the identity provider reports for a render.
///
/// Build-time renders always use [`Viewer::Anonymous`]; the client bundle
/// swaps in the real session after hydration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Viewer {
    #[default]
    Anonymous,
    SignedIn { display_name: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewerView {
    pub signed_in: bool,
    pub display_name: Option<String>,
}

impl From<&Viewer> for ViewerView {
    fn from(viewer: &Viewer) -> Self {
        match viewer {
            Viewer::Anonymous => Self {
                signed_in: false,
                display_name: None,
            },
            Viewer::SignedIn { display_name } => Self {
                signed_in: true,
                display_name: Some(display_name.clone()),
            },
        }
    }
}

/// A header or footer link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Header and footer links resolved against the registry once.
#[derive(Debug, Clone, Default)]
pub struct SiteLinks {
    header: Vec<(String, String)>,
    footer: Vec<(String, String)>,
}

impl SiteLinks {
    /// Keep only links whose target is registered, labelled from the registry.
    pub fn from_registry(registry: &RouteRegistry) -> Self {
        let resolve = |paths: &[&str]| {
            paths
                .iter()
                .filter_map(|path| registry.route(path))
                .map(|r| (r.label.clone(), normalize_path(&r.path)))
                .collect::<Vec<_>>()
        };

        Self {
            header: resolve(HEADER_PATHS),
            footer: resolve(FOOTER_PATHS),
        }
    }
}

/// Layout data handed to every template as `chrome`.
#[derive(Debug, Clone, Serialize)]
pub struct Chrome {
    pub site_name: String,
    pub nav: Vec<NavLink>,
    pub footer: Vec<NavLink>,
    pub viewer: ViewerView,
}

impl Chrome {
    /// Build the chrome for a render. `active_path` is the canonical path of
    /// the matched route, so aliases highlight the same link as their target.
    pub fn new(
        site_name: &str,
        links: &SiteLinks,
        active_path: Option<&str>,
        viewer: &Viewer,
    ) -> Self {
        let to_links = |items: &[(String, String)]| {
            items
                .iter()
                .map(|(label, href)| NavLink {
                    label: label.clone(),
                    href: href.clone(),
                    active: active_path.is_some_and(|p| is_within(p, href)),
                })
                .collect()
        };

        Self {
            site_name: site_name.to_string(),
            nav: to_links(&links.header),
            footer: to_links(&links.footer),
            viewer: viewer.into(),
        }
    }
}

/// Whether `path` is `section` or nested below it.
fn is_within(path: &str, section: &str) -> bool {
    path == section
        || path
            .strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('/'))
}
