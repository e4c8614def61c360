//! Server-side renderer for the Blueprint site.
//!
//! Turns a URL into the page markup (wrapped in the shared header and footer
//! layout) plus the serialized head tags collected while rendering. Rendering
//! is synchronous and deterministic, which is what lets the prerender driver
//! produce byte-identical files across builds.

pub mod content;
pub mod context;
pub mod head;
pub mod location;
pub mod pages;
pub mod renderer;
pub mod switch;
pub mod templates;

pub use context::Viewer;
pub use head::{HeadCollector, HeadTag};
pub use location::Location;
pub use pages::PageId;
pub use renderer::{RenderError, RenderOptions, RenderOutput, ServerRenderer};
pub use switch::{RouteSwitch, SwitchRoute};
