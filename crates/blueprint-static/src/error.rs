//! Build errors shared by all generators.

use std::path::PathBuf;

use blueprint_render::RenderError;

use crate::template::TemplateError;

/// Errors that can occur during a build step.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("HTML template not found: {0}. Build the client bundle first.")]
    TemplateNotFound(PathBuf),

    #[error("Invalid HTML template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("Route {0} has no page component in the renderer")]
    MissingComponent(String),

    #[error("Route {0} cannot be mapped to an output file")]
    InvalidRoutePath(String),

    #[error("Failed to render {route}: {source}")]
    Render {
        route: String,
        #[source]
        source: RenderError,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
