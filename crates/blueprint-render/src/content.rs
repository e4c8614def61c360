//! Static page copy and the marketplace catalog.
//!
//! Everything here is available synchronously at render time. Long-form copy
//! is authored as Markdown and converted with pulldown-cmark.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

/// Convert Markdown to HTML.
pub fn markdown_to_html(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// A titled block of Markdown copy.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// A section ready for templates.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub body_html: String,
}

/// Copy for a simple heading, lede and sections page.
#[derive(Debug, Clone, Copy)]
pub struct ContentPage {
    pub heading: &'static str,
    pub lede: &'static str,
    pub sections: &'static [MarkdownSection],
}

impl ContentPage {
    pub fn sections_html(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|s| Section {
                title: s.title,
                body_html: markdown_to_html(s.body),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_HEADLINE: &str = "Real places, simulation-ready.";

pub const HERO_SUBHEAD: &str = "Blueprint captures real kitchens, warehouses and stores and turns them into \
physically accurate digital twins and synthetic datasets your robots can train on today.";

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        title: "SimReady scenes",
        body: "Metric-accurate geometry, articulated fixtures and physics materials, validated in Isaac Sim and MuJoCo.",
    },
    Feature {
        title: "Synthetic datasets",
        body: "Rendered RGB, depth, segmentation and 6-DoF pose labels generated from the same scenes.",
    },
    Feature {
        title: "Custom capture",
        body: "Send us a site and a task. We scan it, rebuild it and deliver a scene tuned for your robot.",
    },
];

pub const HOME_STEPS: &[Feature] = &[
    Feature {
        title: "Capture",
        body: "Our crews scan the space with LiDAR and photogrammetry rigs.",
    },
    Feature {
        title: "Rebuild",
        body: "Artists and pipelines produce clean meshes, joints and collision geometry.",
    },
    Feature {
        title: "Validate",
        body: "Every scene is loaded, stepped and checked in simulation before it ships.",
    },
];

/// A pricing card. `cta_path` is only linked when the route is registered.
#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta_path: &'static str,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Scene license",
        price: "$499",
        cadence: "per scene",
        features: &[
            "Perpetual research and commercial license",
            "USD, MJCF and URDF exports",
            "Articulated doors, drawers and appliances",
        ],
        cta_label: "Browse scenes",
        cta_path: "/marketplace/scenes",
    },
    PricingTier {
        name: "Dataset pack",
        price: "$1,200",
        cadence: "per pack",
        features: &[
            "50k labeled frames per pack",
            "Depth, instance masks and object poses",
            "Domain-randomized lighting and clutter",
        ],
        cta_label: "Browse datasets",
        cta_path: "/marketplace/datasets",
    },
    PricingTier {
        name: "Custom capture",
        price: "Custom",
        cadence: "per engagement",
        features: &[
            "On-site capture of your facility",
            "Task-specific assets and evaluation suites",
            "Dedicated simulation engineer",
        ],
        cta_label: "Contact sales",
        cta_path: "/contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Scene,
    Dataset,
    Bundle,
}

/// A sellable catalog item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogItem {
    pub slug: &'static str,
    pub title: &'static str,
    pub kind: ItemKind,
    pub summary: &'static str,
    pub price_usd: u32,
}

pub const CATALOG: &[CatalogItem] = &[
    CatalogItem {
        slug: "galley-kitchen",
        title: "Galley Kitchen",
        kind: ItemKind::Scene,
        summary: "Residential kitchen with 14 articulated cabinets, a working fridge and dishwasher.",
        price_usd: 499,
    },
    CatalogItem {
        slug: "micro-fulfillment-aisle",
        title: "Micro-fulfillment Aisle",
        kind: ItemKind::Scene,
        summary: "Two racked aisles with totes, a pick station and a conveyor segment.",
        price_usd: 699,
    },
    CatalogItem {
        slug: "corner-grocery",
        title: "Corner Grocery",
        kind: ItemKind::Scene,
        summary: "Retail floor with shelving, a checkout counter and 300 SKUs.",
        price_usd: 599,
    },
    CatalogItem {
        slug: "tabletop-grasping-50k",
        title: "Tabletop Grasping 50k",
        kind: ItemKind::Dataset,
        summary: "50k frames of cluttered tabletops with grasp poses and instance masks.",
        price_usd: 1200,
    },
    CatalogItem {
        slug: "warehouse-navigation-depth",
        title: "Warehouse Navigation Depth",
        kind: ItemKind::Dataset,
        summary: "Stereo depth and semantic labels along 40 km of simulated warehouse routes.",
        price_usd: 1500,
    },
    CatalogItem {
        slug: "home-manipulation-bundle",
        title: "Home Manipulation Bundle",
        kind: ItemKind::Bundle,
        summary: "Three residential scenes plus a matching 100k-frame manipulation dataset.",
        price_usd: 2900,
    },
];

/// Catalog items, optionally narrowed to one kind, in catalog order.
pub fn catalog(kind: Option<ItemKind>) -> Vec<CatalogItem> {
    CATALOG
        .iter()
        .filter(|item| kind.map_or(true, |k| item.kind == k))
        .copied()
        .collect()
}

pub const HOW_IT_WORKS: ContentPage = ContentPage {
    heading: "How it works",
    lede: "From a walkthrough of a real site to a scene your simulator can load.",
    sections: &[
        MarkdownSection {
            title: "1. Capture",
            body: "A two-person crew scans the site in a few hours using LiDAR, \
                   photogrammetry and reference measurements. Nothing leaves the site \
                   without your approval.",
        },
        MarkdownSection {
            title: "2. Rebuild",
            body: "We rebuild the space as clean, watertight meshes with **articulated \
                   joints**, collision hulls and physically based materials.",
        },
        MarkdownSection {
            title: "3. Validate and deliver",
            body: "Each scene is stepped in simulation with a reference robot. You receive:\n\n\
                   - USD for Isaac Sim\n\
                   - MJCF for MuJoCo\n\
                   - URDF fixtures for ROS tooling",
        },
    ],
};

pub const SOLUTIONS: ContentPage = ContentPage {
    heading: "Solutions",
    lede: "Blueprint data plugs into the parts of the robotics stack that need the real world most.",
    sections: &[
        MarkdownSection {
            title: "Manipulation",
            body: "Train grasping and mobile manipulation policies on kitchens and stores \
                   with real drawer pulls, hinge limits and clutter.",
        },
        MarkdownSection {
            title: "Navigation",
            body: "Evaluate planners in metric-accurate warehouses and retail floors before \
                   you book time on a customer site.",
        },
        MarkdownSection {
            title: "Evaluation",
            body: "Build repeatable benchmark suites from the exact sites you will deploy to.",
        },
    ],
};

pub const ABOUT: ContentPage = ContentPage {
    heading: "About Blueprint",
    lede: "We are building the data layer for embodied AI.",
    sections: &[MarkdownSection {
        title: "Why we exist",
        body: "Robots fail in the gap between simulation and the real world. \
               Blueprint closes that gap by bringing real places into simulation, \
               accurately and at scale.",
    }],
};

pub const CAREERS: ContentPage = ContentPage {
    heading: "Careers",
    lede: "Help robots understand the places people live and work.",
    sections: &[
        MarkdownSection {
            title: "Open roles",
            body: "- Capture technician\n\
                   - Simulation engineer\n\
                   - Platform engineer",
        },
        MarkdownSection {
            title: "How to apply",
            body: "Send a short note and links to your work to careers@tryblueprint.io.",
        },
    ],
};

pub const CONTACT: ContentPage = ContentPage {
    heading: "Contact",
    lede: "Custom scenes, enterprise licensing or partnerships: we would like to hear from you.",
    sections: &[MarkdownSection {
        title: "Email",
        body: "Sales: sales@tryblueprint.io  \nSupport: support@tryblueprint.io",
    }],
};

pub const PRIVACY: ContentPage = ContentPage {
    heading: "Privacy policy",
    lede: "How Blueprint collects, uses and protects personal data.",
    sections: &[
        MarkdownSection {
            title: "What we collect",
            body: "Account details you provide, order records and basic usage analytics. \
                   Payment details are handled by our payment processor and never stored by Blueprint.",
        },
        MarkdownSection {
            title: "Your choices",
            body: "You can request export or deletion of your data by writing to privacy@tryblueprint.io.",
        },
    ],
};

pub const TERMS: ContentPage = ContentPage {
    heading: "Terms of service",
    lede: "Terms governing use of the Blueprint site and marketplace licenses.",
    sections: &[
        MarkdownSection {
            title: "Licenses",
            body: "Marketplace purchases grant a non-exclusive license to use the asset for \
                   research and commercial robot development. Redistribution of raw assets is not permitted.",
        },
        MarkdownSection {
            title: "Refunds",
            body: "Contact support within 14 days if an asset fails to load in a supported simulator.",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markdown_lists() {
        let html = markdown_to_html("- one\n- two");

        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn filters_catalog_by_kind() {
        let scenes = catalog(Some(ItemKind::Scene));

        assert!(!scenes.is_empty());
        assert!(scenes.iter().all(|i| i.kind == ItemKind::Scene));
        assert_eq!(catalog(None).len(), CATALOG.len());
    }
}
