//! Build-time generators for the Blueprint site.
//!
//! Each generator takes the [`RouteRegistry`](blueprint_routes::RouteRegistry)
//! as an explicit argument and runs as a single sequential pass: read inputs,
//! compute, write outputs. Any failure aborts the run.

pub mod error;
pub mod llms;
pub mod output;
pub mod prerender;
pub mod sitemap;
pub mod template;

pub use error::BuildError;
pub use llms::LlmsFeed;
pub use prerender::{prerender_dist, PrerenderConfig, PrerenderReport, PrerenderedPage, Prerenderer};
pub use sitemap::SitemapGenerator;
pub use template::{HtmlTemplate, Slot, TemplateError, BODY_MARKER, HEAD_MARKER};
