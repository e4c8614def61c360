//! Template engine for page components.

use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("templates/layout.html")),
    ("home.html", include_str!("templates/home.html")),
    ("marketplace.html", include_str!("templates/marketplace.html")),
    ("pricing.html", include_str!("templates/pricing.html")),
    ("content.html", include_str!("templates/content.html")),
    ("not_found.html", include_str!("templates/not_found.html")),
];

/// Template engine using minijinja.
///
/// Templates are compiled into the binary; `.html` names get HTML
/// auto-escaping.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in page templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    /// Render a template with the given context.
    pub fn render<S: Serialize>(&self, template: &str, ctx: S) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(ctx)
    }
}
