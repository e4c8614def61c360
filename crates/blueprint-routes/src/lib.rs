//! Route registry for the Blueprint site.
//!
//! The registry is the single source of truth for public routes. The sitemap,
//! the LLM feeds and the prerender driver all consume the same
//! [`RouteRegistry`] value instead of importing shared globals.

pub mod entry;
pub mod registry;
pub mod site;

pub use entry::{ChangeFrequency, ExcludedRoute, RouteAlias, RouteEntry, HIGH_PRIORITY_THRESHOLD};
pub use registry::{absolute_url, normalize_path, RegistryError, RouteRegistry};
