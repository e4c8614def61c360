//! The compiled-in registry for tryblueprint.io.

use crate::entry::{ChangeFrequency, ExcludedRoute, RouteAlias, RouteEntry};
use crate::registry::RouteRegistry;

/// Canonical origin of the production site, without a trailing slash.
pub const BASE_URL: &str = "https://tryblueprint.io";

/// Display name used in titles and feeds.
pub const SITE_NAME: &str = "Blueprint";

/// The public route registry of the Blueprint site.
pub fn registry() -> RouteRegistry {
    use ChangeFrequency::*;

    let routes = vec![
        RouteEntry::new(
            "/",
            "Home",
            "Simulation-ready digital twins and synthetic datasets for training and evaluating robots.",
            Weekly,
            1.0,
        ),
        RouteEntry::new(
            "/marketplace",
            "Marketplace",
            "Browse SimReady scenes, datasets and bundles ready to drop into robotics simulators.",
            Weekly,
            0.9,
        ),
        RouteEntry::new(
            "/marketplace/scenes",
            "Scenes",
            "Physically accurate 3D scenes of kitchens, warehouses, retail floors and labs.",
            Weekly,
            0.8,
        ),
        RouteEntry::new(
            "/marketplace/datasets",
            "Datasets",
            "Labeled synthetic datasets with depth, segmentation and pose ground truth.",
            Weekly,
            0.8,
        ),
        RouteEntry::new(
            "/pricing",
            "Pricing",
            "Per-scene licensing, dataset packs and custom capture engagements.",
            Monthly,
            0.8,
        ),
        RouteEntry::new(
            "/how-it-works",
            "How it works",
            "From on-site capture to a validated, simulator-ready scene in days.",
            Monthly,
            0.7,
        ),
        RouteEntry::new(
            "/solutions",
            "Solutions",
            "How robotics teams use Blueprint for manipulation, navigation and evaluation.",
            Monthly,
            0.7,
        ),
        RouteEntry::new(
            "/about",
            "About",
            "The team building the data layer for embodied AI.",
            Monthly,
            0.5,
        ),
        RouteEntry::new(
            "/careers",
            "Careers",
            "Open roles across capture, simulation and platform engineering.",
            Monthly,
            0.5,
        ),
        RouteEntry::new(
            "/contact",
            "Contact",
            "Talk to us about custom scenes, enterprise licensing or partnerships.",
            Monthly,
            0.6,
        ),
        RouteEntry::new(
            "/privacy",
            "Privacy policy",
            "How Blueprint collects, uses and protects personal data.",
            Yearly,
            0.3,
        ),
        RouteEntry::new(
            "/terms",
            "Terms of service",
            "Terms governing use of the Blueprint site and marketplace licenses.",
            Yearly,
            0.3,
        ),
    ];

    let aliases = vec![
        RouteAlias::new(
            "/environments",
            "/marketplace",
            "Legacy marketplace URL kept for links shared before the rename.",
        ),
        RouteAlias::new(
            "/scenes",
            "/marketplace/scenes",
            "Short link used in outbound campaigns.",
        ),
    ];

    let excluded = vec![
        ExcludedRoute::new("/login", "Authentication form, no public content."),
        ExcludedRoute::new("/signup", "Authentication form, no public content."),
        ExcludedRoute::new("/dashboard", "Requires sign-in; shows per-user purchases."),
        ExcludedRoute::new("/settings", "Requires sign-in; account settings."),
        ExcludedRoute::new("/orders", "Requires sign-in; per-user order history."),
        ExcludedRoute::new(
            "/checkout/success",
            "Post-payment redirect target, meaningful only after checkout.",
        ),
        ExcludedRoute::new(
            "/checkout/cancel",
            "Payment cancellation redirect target.",
        ),
    ];

    RouteRegistry::new(routes, aliases, excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_are_unique() {
        let registry = registry();
        let unique: HashSet<&str> = registry.routes().iter().map(|r| r.path.as_str()).collect();

        assert_eq!(unique.len(), registry.routes().len());
    }

    #[test]
    fn aliases_point_at_registered_routes() {
        let registry = registry();

        for alias in registry.aliases() {
            assert!(
                registry.route(&alias.alias_for).is_some(),
                "alias {} targets unknown route {}",
                alias.path,
                alias.alias_for
            );
            assert!(registry.route(&alias.path).is_none());
        }
    }

    #[test]
    fn excluded_routes_are_not_public() {
        let registry = registry();

        for excluded in registry.excluded() {
            assert!(registry.route(&excluded.path).is_none());
        }
    }

    #[test]
    fn home_route_has_top_priority() {
        let registry = registry();
        let home = registry.route("/").unwrap();

        assert_eq!(home.priority, 1.0);
    }
}
