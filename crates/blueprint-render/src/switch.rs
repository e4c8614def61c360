//! Route switch derived from the registry.
//!
//! The switch is the only place paths are matched to page components, so the
//! prerender driver and any runtime lookup share one policy: a registered path
//! without a component is an error when the switch is built, never a silent skip.

use blueprint_routes::{normalize_path, RouteEntry, RouteRegistry};

use crate::pages::PageId;
use crate::renderer::RenderError;

/// A matchable path.
#[derive(Debug, Clone)]
pub struct SwitchRoute {
    /// Normalized path this entry matches
    pub path: String,

    /// Component rendered for the path
    pub page: PageId,

    /// Registry entry of the canonical route (the alias target for aliases)
    pub canonical: RouteEntry,

    /// Set when `path` is an alias
    pub alias_for: Option<String>,
}

/// Ordered path-to-component table.
#[derive(Debug, Clone, Default)]
pub struct RouteSwitch {
    routes: Vec<SwitchRoute>,
}

impl RouteSwitch {
    /// Build the switch from a registry.
    ///
    /// Fails when a public route has no component, or when an alias targets a
    /// path that is not a registered public route.
    pub fn from_registry(registry: &RouteRegistry) -> Result<Self, RenderError> {
        let mut switch = Self::default();

        for entry in registry.routes() {
            let path = normalize_path(&entry.path);
            let page = PageId::for_path(&path)
                .ok_or_else(|| RenderError::MissingComponent(path.clone()))?;

            if switch.contains(&path) {
                tracing::warn!("Duplicate route {} ignored, first entry wins", path);
                continue;
            }

            switch.routes.push(SwitchRoute {
                path,
                page,
                canonical: entry.clone(),
                alias_for: None,
            });
        }

        for alias in registry.aliases() {
            let path = normalize_path(&alias.path);
            let target = switch
                .resolve(&alias.alias_for)
                .filter(|r| r.alias_for.is_none())
                .cloned()
                .ok_or_else(|| RenderError::UnknownAliasTarget {
                    alias: path.clone(),
                    target: alias.alias_for.clone(),
                })?;

            if switch.contains(&path) {
                tracing::warn!(
                    "Alias {} shadowed by an existing route, ignoring",
                    path
                );
                continue;
            }

            switch.routes.push(SwitchRoute {
                path,
                page: target.page,
                canonical: target.canonical,
                alias_for: Some(target.path),
            });
        }

        tracing::debug!("Route switch built with {} entries", switch.routes.len());
        Ok(switch)
    }

    /// Find the entry for a pathname. Trailing slashes are ignored.
    pub fn resolve(&self, pathname: &str) -> Option<&SwitchRoute> {
        let wanted = normalize_path(pathname);
        self.routes.iter().find(|r| r.path == wanted)
    }

    /// All entries: public routes first, then aliases.
    pub fn routes(&self) -> &[SwitchRoute] {
        &self.routes
    }

    fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|r| r.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_routes::{site, ChangeFrequency, RouteAlias};

    fn entry(path: &str) -> RouteEntry {
        RouteEntry::new(path, "Label", "Summary", ChangeFrequency::Monthly, 0.5)
    }

    #[test]
    fn builds_from_site_registry() {
        let registry = site::registry();
        let switch = RouteSwitch::from_registry(&registry).unwrap();

        assert_eq!(
            switch.routes().len(),
            registry.routes().len() + registry.aliases().len()
        );
    }

    #[test]
    fn aliases_resolve_to_canonical_component() {
        let switch = RouteSwitch::from_registry(&site::registry()).unwrap();
        let alias = switch.resolve("/environments").unwrap();

        assert_eq!(alias.page, PageId::Marketplace);
        assert_eq!(alias.canonical.path, "/marketplace");
        assert_eq!(alias.alias_for.as_deref(), Some("/marketplace"));
    }

    #[test]
    fn missing_component_fails_loudly() {
        let registry = RouteRegistry::new(vec![entry("/"), entry("/webinars")], vec![], vec![]);

        let result = RouteSwitch::from_registry(&registry);

        assert!(matches!(result, Err(RenderError::MissingComponent(p)) if p == "/webinars"));
    }

    #[test]
    fn alias_to_unregistered_route_fails() {
        let registry = RouteRegistry::new(
            vec![entry("/")],
            vec![RouteAlias::new("/environments", "/marketplace", "legacy")],
            vec![],
        );

        let result = RouteSwitch::from_registry(&registry);

        assert!(matches!(result, Err(RenderError::UnknownAliasTarget { .. })));
    }

    #[test]
    fn duplicate_paths_keep_first_entry() {
        let mut first = entry("/pricing");
        first.label = "First".to_string();
        let mut second = entry("/pricing/");
        second.label = "Second".to_string();
        let registry = RouteRegistry::new(vec![first, second], vec![], vec![]);

        let switch = RouteSwitch::from_registry(&registry).unwrap();

        assert_eq!(switch.routes().len(), 1);
        assert_eq!(switch.resolve("/pricing").unwrap().canonical.label, "First");
    }

    #[test]
    fn unknown_path_does_not_resolve() {
        let switch = RouteSwitch::from_registry(&site::registry()).unwrap();

        assert!(switch.resolve("/no-such-page").is_none());
        assert!(switch.resolve("/pricing/").is_some());
    }
}
