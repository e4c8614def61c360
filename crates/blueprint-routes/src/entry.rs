//! Route descriptor types.

use std::fmt;

use serde::Deserialize;

/// Routes at or above this priority are listed as high priority in the LLM feed.
pub const HIGH_PRIORITY_THRESHOLD: f64 = 0.7;

/// How often a route's content is expected to change.
///
/// Advisory only; written verbatim into `<changefreq>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A public route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteEntry {
    /// URL path, `/` for the home page
    pub path: String,

    /// Short human-readable name
    pub label: String,

    /// One-sentence description
    pub summary: String,

    /// Sitemap change frequency
    pub change_frequency: ChangeFrequency,

    /// Sitemap priority, conventionally in `[0.0, 1.0]`
    pub priority: f64,
}

impl RouteEntry {
    /// Create a route entry.
    pub fn new(
        path: impl Into<String>,
        label: impl Into<String>,
        summary: impl Into<String>,
        change_frequency: ChangeFrequency,
        priority: f64,
    ) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            summary: summary.into(),
            change_frequency,
            priority,
        }
    }

    /// Whether this route belongs in the high-priority list.
    pub fn is_high_priority(&self) -> bool {
        self.priority >= HIGH_PRIORITY_THRESHOLD
    }
}

/// A legacy or convenience path that renders the same page as a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteAlias {
    pub path: String,
    pub alias_for: String,
    pub reason: String,
}

impl RouteAlias {
    pub fn new(
        path: impl Into<String>,
        alias_for: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            alias_for: alias_for.into(),
            reason: reason.into(),
        }
    }
}

/// A route deliberately kept out of the sitemap and LLM feeds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExcludedRoute {
    pub path: String,
    pub reason: String,
}

impl ExcludedRoute {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
