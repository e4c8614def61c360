//! Page components and the path-to-component map.

use minijinja::context;
use serde::Serialize;

use blueprint_routes::{absolute_url, normalize_path, RouteEntry};

use crate::content::{self, ContentPage, ItemKind, PricingTier};
use crate::context::Chrome;
use crate::head::{HeadCollector, HeadTag};
use crate::location::Location;
use crate::renderer::{RenderError, RenderOptions};
use crate::switch::RouteSwitch;
use crate::templates::TemplateEngine;

/// A page component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Marketplace,
    MarketplaceScenes,
    MarketplaceDatasets,
    Pricing,
    HowItWorks,
    Solutions,
    About,
    Careers,
    Contact,
    Privacy,
    Terms,
    NotFound,
}

impl PageId {
    /// The component registered for a public path. `NotFound` is never
    /// returned; it is the fallthrough for unmatched URLs.
    pub fn for_path(path: &str) -> Option<Self> {
        let page = match normalize_path(path).as_str() {
            "/" => Self::Home,
            "/marketplace" => Self::Marketplace,
            "/marketplace/scenes" => Self::MarketplaceScenes,
            "/marketplace/datasets" => Self::MarketplaceDatasets,
            "/pricing" => Self::Pricing,
            "/how-it-works" => Self::HowItWorks,
            "/solutions" => Self::Solutions,
            "/about" => Self::About,
            "/careers" => Self::Careers,
            "/contact" => Self::Contact,
            "/privacy" => Self::Privacy,
            "/terms" => Self::Terms,
            _ => return None,
        };
        Some(page)
    }

    /// Template used to render this page.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Home => "home.html",
            Self::Marketplace | Self::MarketplaceScenes | Self::MarketplaceDatasets => {
                "marketplace.html"
            }
            Self::Pricing => "pricing.html",
            Self::HowItWorks
            | Self::Solutions
            | Self::About
            | Self::Careers
            | Self::Contact
            | Self::Privacy
            | Self::Terms => "content.html",
            Self::NotFound => "not_found.html",
        }
    }

    /// Render the page body and push its head tags.
    pub(crate) fn render(self, cx: &mut PageCx<'_>) -> Result<String, RenderError> {
        cx.push_route_head();

        match self {
            Self::Home => {
                cx.head.push(HeadTag::json_ld(&OrganizationLd::new(cx.options))?);
                cx.render(
                    self,
                    context! {
                        headline => content::HERO_HEADLINE,
                        subhead => content::HERO_SUBHEAD,
                        features => content::HOME_FEATURES,
                        steps => content::HOME_STEPS,
                        marketplace_href => cx.link("/marketplace"),
                        contact_href => cx.link("/contact"),
                        how_it_works_href => cx.link("/how-it-works"),
                    },
                )
            }
            Self::Marketplace => marketplace(cx, self, None),
            Self::MarketplaceScenes => marketplace(cx, self, Some(ItemKind::Scene)),
            Self::MarketplaceDatasets => marketplace(cx, self, Some(ItemKind::Dataset)),
            Self::Pricing => cx.render(
                self,
                context! {
                    heading => "Pricing",
                    lede => "License individual scenes, buy dataset packs, or commission a capture of your own site.",
                    tiers => content::PRICING_TIERS
                        .iter()
                        .map(|tier| TierView::new(tier, &*cx))
                        .collect::<Vec<_>>(),
                },
            ),
            Self::HowItWorks => content_page(cx, self, &content::HOW_IT_WORKS),
            Self::Solutions => content_page(cx, self, &content::SOLUTIONS),
            Self::About => content_page(cx, self, &content::ABOUT),
            Self::Careers => content_page(cx, self, &content::CAREERS),
            Self::Contact => content_page(cx, self, &content::CONTACT),
            Self::Privacy => content_page(cx, self, &content::PRIVACY),
            Self::Terms => content_page(cx, self, &content::TERMS),
            Self::NotFound => {
                cx.head.push(HeadTag::title(format!(
                    "Page not found | {}",
                    cx.options.site_name
                )));
                cx.head.push(HeadTag::meta_name("robots", "noindex"));
                cx.render(self, context! { pathname => &cx.location.pathname })
            }
        }
    }
}

/// Everything a page component can reach during a render.
pub(crate) struct PageCx<'a> {
    pub templates: &'a TemplateEngine,
    pub switch: &'a RouteSwitch,
    pub head: &'a mut HeadCollector,
    pub chrome: &'a Chrome,
    pub options: &'a RenderOptions,
    pub location: &'a Location,
    /// Canonical registry entry of the matched route, `None` for not-found
    pub route: Option<&'a RouteEntry>,
}

impl PageCx<'_> {
    fn render<S: Serialize>(&self, page: PageId, data: S) -> Result<String, RenderError> {
        Ok(self.templates.render(
            page.template(),
            context! { chrome => self.chrome, page => data },
        )?)
    }

    /// Href for an in-page link, `None` when `path` is not a registered page.
    fn link(&self, path: &str) -> Option<String> {
        self.switch
            .resolve(path)
            .map(|r| r.alias_for.clone().unwrap_or_else(|| r.path.clone()))
    }

    /// Title, description, canonical link and Open Graph tags from the
    /// registry entry.
    fn push_route_head(&mut self) {
        let Some(route) = self.route else {
            return;
        };

        let site = &self.options.site_name;
        let title = if normalize_path(&route.path) == "/" {
            format!("{} | Simulation-ready scenes and datasets for robotics", site)
        } else {
            format!("{} | {}", route.label, site)
        };
        let url = absolute_url(&self.options.base_url, &route.path);

        self.head.extend([
            HeadTag::title(title.clone()),
            HeadTag::meta_name("description", route.summary.clone()),
            HeadTag::meta_property("og:type", "website"),
            HeadTag::meta_property("og:title", title),
            HeadTag::meta_property("og:description", route.summary.clone()),
            HeadTag::meta_property("og:url", url.clone()),
            HeadTag::meta_name("twitter:card", "summary_large_image"),
            HeadTag::link("canonical", url),
        ]);
    }
}

#[derive(Debug, Serialize)]
struct Filter {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct TierView {
    name: &'static str,
    price: &'static str,
    cadence: &'static str,
    features: &'static [&'static str],
    cta_label: &'static str,
    cta_href: Option<String>,
}

impl TierView {
    fn new(tier: &PricingTier, cx: &PageCx<'_>) -> Self {
        Self {
            name: tier.name,
            price: tier.price,
            cadence: tier.cadence,
            features: tier.features,
            cta_label: tier.cta_label,
            cta_href: cx.link(tier.cta_path),
        }
    }
}

fn marketplace(
    cx: &mut PageCx<'_>,
    page: PageId,
    kind: Option<ItemKind>,
) -> Result<String, RenderError> {
    let (heading, lede) = match kind {
        Some(ItemKind::Scene) => (
            "Scenes",
            "Physically accurate digital twins of real places, validated in simulation.",
        ),
        Some(ItemKind::Dataset) => (
            "Datasets",
            "Labeled synthetic data rendered from Blueprint scenes.",
        ),
        _ => (
            "Marketplace",
            "SimReady scenes, datasets and bundles for robotics teams.",
        ),
    };

    let filters = [
        ("All", "/marketplace", None),
        ("Scenes", "/marketplace/scenes", Some(ItemKind::Scene)),
        ("Datasets", "/marketplace/datasets", Some(ItemKind::Dataset)),
    ]
    .into_iter()
    .filter_map(|(label, path, filter_kind)| {
        Some(Filter {
            label,
            href: cx.link(path)?,
            active: filter_kind == kind,
        })
    })
    .collect::<Vec<_>>();

    cx.render(
        page,
        context! {
            heading => heading,
            lede => lede,
            filters => filters,
            items => content::catalog(kind),
        },
    )
}

fn content_page(
    cx: &mut PageCx<'_>,
    page: PageId,
    copy: &ContentPage,
) -> Result<String, RenderError> {
    cx.render(
        page,
        context! {
            heading => copy.heading,
            lede => copy.lede,
            sections => copy.sections_html(),
        },
    )
}

/// schema.org Organization for the home page.
#[derive(Debug, Serialize)]
struct OrganizationLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    url: String,
    description: &'static str,
}

impl<'a> OrganizationLd<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: &options.site_name,
            url: absolute_url(&options.base_url, "/"),
            description: content::HERO_SUBHEAD,
        }
    }
}
