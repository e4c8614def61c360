//! The route registry value shared by every generator.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entry::{ExcludedRoute, RouteAlias, RouteEntry};

/// Public routes, aliases and exclusions.
///
/// Built once and never mutated. Generators take it by reference so tests can
/// hand them a fabricated registry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouteRegistry {
    #[serde(default)]
    routes: Vec<RouteEntry>,

    #[serde(default)]
    aliases: Vec<RouteAlias>,

    #[serde(default)]
    excluded: Vec<ExcludedRoute>,
}

impl RouteRegistry {
    /// Create a registry from its three lists.
    pub fn new(
        routes: Vec<RouteEntry>,
        aliases: Vec<RouteAlias>,
        excluded: Vec<ExcludedRoute>,
    ) -> Self {
        Self {
            routes,
            aliases,
            excluded,
        }
    }

    /// Parse a registry from TOML with `[[routes]]`, `[[aliases]]` and `[[excluded]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self, RegistryError> {
        toml::from_str(source).map_err(|e| RegistryError::Parse(e.to_string()))
    }

    /// Load a registry from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let source = fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Public routes in registry order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Alias routes.
    pub fn aliases(&self) -> &[RouteAlias] {
        &self.aliases
    }

    /// Routes excluded from discovery surfaces.
    pub fn excluded(&self) -> &[ExcludedRoute] {
        &self.excluded
    }

    /// Look up a public route by path. Trailing slashes are ignored.
    pub fn route(&self, path: &str) -> Option<&RouteEntry> {
        let wanted = normalize_path(path);
        self.routes.iter().find(|r| normalize_path(&r.path) == wanted)
    }

    /// Routes whose priority meets the high-priority threshold, in registry order.
    pub fn high_priority(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().filter(|r| r.is_high_priority())
    }

    /// Normalized route paths with duplicates removed, first occurrence wins.
    pub fn unique_paths(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.routes
            .iter()
            .map(|r| normalize_path(&r.path))
            .filter(|p| seen.insert(p.clone()))
            .collect()
    }
}

/// Strip trailing slashes from a route path. The root path stays `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Absolute URL of a route: the root maps to `base/`, every other path to
/// `base + path` without a trailing slash.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    match normalize_path(path).as_str() {
        "/" => format!("{}/", base),
        other => format!("{}{}", base, other),
    }
}

/// Errors that can occur when loading a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read route registry {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid route registry: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ChangeFrequency;
    use pretty_assertions::assert_eq;

    fn entry(path: &str, priority: f64) -> RouteEntry {
        RouteEntry::new(path, path, "summary", ChangeFrequency::Monthly, priority)
    }

    #[test]
    fn normalizes_trailing_slashes() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/pricing/"), "/pricing");
        assert_eq!(normalize_path("/pricing"), "/pricing");
        assert_eq!(normalize_path("/marketplace/scenes//"), "/marketplace/scenes");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn builds_absolute_urls() {
        assert_eq!(absolute_url("https://tryblueprint.io", "/"), "https://tryblueprint.io/");
        assert_eq!(absolute_url("https://tryblueprint.io/", "/pricing/"), "https://tryblueprint.io/pricing");
    }

    #[test]
    fn unique_paths_keep_first_seen_order() {
        let registry = RouteRegistry::new(
            vec![
                entry("/", 1.0),
                entry("/pricing/", 0.8),
                entry("/about", 0.5),
                entry("/pricing", 0.3),
            ],
            vec![],
            vec![],
        );

        assert_eq!(registry.unique_paths(), vec!["/", "/pricing", "/about"]);
    }

    #[test]
    fn high_priority_filters_in_registry_order() {
        let registry = RouteRegistry::new(
            vec![entry("/", 1.0), entry("/terms", 0.3), entry("/pricing", 0.7)],
            vec![],
            vec![],
        );

        let paths: Vec<&str> = registry.high_priority().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/pricing"]);
    }

    #[test]
    fn looks_up_routes_ignoring_trailing_slash() {
        let registry = RouteRegistry::new(vec![entry("/pricing", 0.8)], vec![], vec![]);

        assert!(registry.route("/pricing/").is_some());
        assert!(registry.route("/missing").is_none());
    }

    #[test]
    fn parses_toml_registry() {
        let source = r#"
[[routes]]
path = "/"
label = "Home"
summary = "Landing page"
change_frequency = "weekly"
priority = 1.0

[[aliases]]
path = "/environments"
alias_for = "/"
reason = "Legacy URL"

[[excluded]]
path = "/dashboard"
reason = "Requires sign-in"
"#;

        let registry = RouteRegistry::from_toml_str(source).unwrap();

        assert_eq!(registry.routes().len(), 1);
        assert_eq!(registry.routes()[0].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(registry.aliases()[0].alias_for, "/");
        assert_eq!(registry.excluded()[0].path, "/dashboard");
    }

    #[test]
    fn rejects_unknown_change_frequency() {
        let source = r#"
[[routes]]
path = "/"
label = "Home"
summary = "Landing page"
change_frequency = "hourly"
priority = 1.0
"#;

        let result = RouteRegistry::from_toml_str(source);

        assert!(matches!(result, Err(RegistryError::Parse(_))));
    }
}
