//! `llms.txt` and `llms-full.txt` generation.
//!
//! Both documents are plain text for crawlers and language models. Prose
//! sections are fixed; route sections are derived from the registry.

use std::path::Path;

use blueprint_routes::RouteRegistry;

use crate::error::BuildError;
use crate::output::write_file;

/// File name of the short feed.
pub const LLMS_FILE: &str = "llms.txt";

/// File name of the long feed.
pub const LLMS_FULL_FILE: &str = "llms-full.txt";

const PRODUCT_DESCRIPTION: &str = "Blueprint captures real-world places such as kitchens, \
warehouses, retail floors and labs, and rebuilds them as simulation-ready digital twins. \
Robotics teams license these SimReady scenes and the synthetic datasets rendered from them \
to train and evaluate manipulation and navigation policies before deploying to real sites.";

const POSITIONING: &str = "Blueprint sits between real-world data collection and simulation. \
Teleoperation data is expensive and hard to scale; procedurally generated scenes do not look \
or behave like the sites robots are deployed to. Blueprint scenes are captured from real \
locations, so geometry, layout and articulation match what the robot will encounter.";

const CAPABILITIES: &[&str] = &[
    "On-site capture with LiDAR and photogrammetry",
    "Metric-accurate meshes with collision geometry and physics materials",
    "Articulated fixtures: doors, drawers, appliances",
    "Exports for Isaac Sim (USD), MuJoCo (MJCF) and ROS tooling (URDF)",
    "Synthetic datasets with RGB, depth, segmentation and 6-DoF pose labels",
    "Custom capture engagements for a customer's own facilities",
];

const FAQS: &[(&str, &str)] = &[
    (
        "Which simulators are supported?",
        "Scenes ship as USD for NVIDIA Isaac Sim, MJCF for MuJoCo and URDF fixtures for ROS-based tooling.",
    ),
    (
        "Can Blueprint capture our own facility?",
        "Yes. Custom capture engagements scan a site, rebuild it and deliver a validated scene, usually within days.",
    ),
    (
        "How are marketplace items licensed?",
        "Purchases grant a non-exclusive license for research and commercial robot development; raw assets may not be redistributed.",
    ),
    (
        "How do I buy?",
        "Sign in, add scenes or datasets from the marketplace and pay through hosted checkout.",
    ),
];

/// Generator for the LLM-facing text feeds.
#[derive(Debug, Clone)]
pub struct LlmsFeed {
    site_name: String,
    base_url: String,
}

impl LlmsFeed {
    pub fn new(site_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            site_name: site_name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Render `llms.txt`.
    pub fn render_summary(&self, registry: &RouteRegistry) -> String {
        let mut out = format!("# {}\n\n{}\n\n", self.site_name, PRODUCT_DESCRIPTION);

        out.push_str("## High-priority public URLs\n\n");
        for route in registry.high_priority() {
            out.push_str(&format!("- {}\n", route.path));
        }

        out.push_str("\n## Full reference\n\n");
        out.push_str(&format!(
            "Product overview, FAQs and route metadata: {}/{}\n",
            self.base_url, LLMS_FULL_FILE
        ));

        out
    }

    /// Render `llms-full.txt`.
    pub fn render_full(&self, registry: &RouteRegistry) -> String {
        let mut out = format!(
            "# {} full reference\n\nSite: {}/\n\n",
            self.site_name, self.base_url
        );

        out.push_str(&format!("## Product overview\n\n{}\n\n", PRODUCT_DESCRIPTION));
        out.push_str(&format!("## Positioning\n\n{}\n\n", POSITIONING));

        out.push_str("## Public pages\n\n");
        for route in registry.routes() {
            out.push_str(&format!(
                "- {} ({}): {}\n",
                route.label, route.path, route.summary
            ));
        }

        out.push_str("\n## Capabilities\n\n");
        for capability in CAPABILITIES {
            out.push_str(&format!("- {}\n", capability));
        }

        out.push_str("\n## Route index\n\n");
        for route in registry.routes() {
            out.push_str(&format!("- {} ({})\n", route.path, route.label));
        }

        out.push_str("\n## Legacy aliases\n\n");
        for alias in registry.aliases() {
            out.push_str(&format!(
                "- {} → {}: {}\n",
                alias.path, alias.alias_for, alias.reason
            ));
        }

        out.push_str("\n## Excluded from discovery\n\n");
        for excluded in registry.excluded() {
            out.push_str(&format!("- {}: {}\n", excluded.path, excluded.reason));
        }

        out.push_str("\n## FAQs\n");
        for (question, answer) in FAQS {
            out.push_str(&format!("\n### {}\n\n{}\n", question, answer));
        }

        out
    }

    /// Write both feeds into `public_dir`, overwriting existing files.
    pub fn write(&self, registry: &RouteRegistry, public_dir: &Path) -> Result<(), BuildError> {
        for (name, contents) in [
            (LLMS_FILE, self.render_summary(registry)),
            (LLMS_FULL_FILE, self.render_full(registry)),
        ] {
            let path = public_dir.join(name);
            write_file(&path, &contents)?;
            tracing::info!("Wrote {}", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_routes::{site, ChangeFrequency, ExcludedRoute, RouteAlias, RouteEntry};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn feed() -> LlmsFeed {
        LlmsFeed::new("Blueprint", "https://tryblueprint.io")
    }

    fn high_priority_section(summary: &str) -> Vec<&str> {
        summary
            .split("## High-priority public URLs\n\n")
            .nth(1)
            .unwrap()
            .lines()
            .take_while(|l| l.starts_with("- "))
            .map(|l| &l[2..])
            .collect()
    }

    #[test]
    fn summary_lists_only_high_priority_routes() {
        let registry = site::registry();

        let summary = feed().render_summary(&registry);
        let listed = high_priority_section(&summary);

        let expected: Vec<&str> = registry
            .routes()
            .iter()
            .filter(|r| r.priority >= 0.7)
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(listed, expected);
        assert!(!listed.contains(&"/terms"));
    }

    #[test]
    fn summary_layout() {
        let registry = RouteRegistry::new(
            vec![
                RouteEntry::new("/", "Home", "Landing", ChangeFrequency::Weekly, 1.0),
                RouteEntry::new("/terms", "Terms", "Legal", ChangeFrequency::Yearly, 0.3),
            ],
            vec![],
            vec![],
        );

        let summary = LlmsFeed::new("Acme", "https://acme.test/").render_summary(&registry);

        assert_eq!(
            summary,
            format!(
                "# Acme\n\n{}\n\n## High-priority public URLs\n\n- /\n\n## Full reference\n\n\
                 Product overview, FAQs and route metadata: https://acme.test/llms-full.txt\n",
                PRODUCT_DESCRIPTION
            )
        );
    }

    #[test]
    fn full_feed_sections_in_order() {
        let full = feed().render_full(&site::registry());

        let headings: Vec<&str> = full.lines().filter(|l| l.starts_with("## ")).collect();
        assert_eq!(
            headings,
            vec![
                "## Product overview",
                "## Positioning",
                "## Public pages",
                "## Capabilities",
                "## Route index",
                "## Legacy aliases",
                "## Excluded from discovery",
                "## FAQs",
            ]
        );
        assert!(full.starts_with("# Blueprint full reference\n\nSite: https://tryblueprint.io/\n\n"));
        assert!(full.ends_with(&format!("{}\n", FAQS[FAQS.len() - 1].1)));
    }

    #[test]
    fn summary_points_at_full_feed() {
        let summary = feed().render_summary(&site::registry());

        assert!(summary.starts_with("# Blueprint\n\n"));
        assert!(summary.contains("https://tryblueprint.io/llms-full.txt"));
    }

    #[test]
    fn full_feed_includes_registry_sections() {
        let registry = RouteRegistry::new(
            vec![RouteEntry::new(
                "/pricing",
                "Pricing",
                "Plans and licenses.",
                ChangeFrequency::Monthly,
                0.8,
            )],
            vec![RouteAlias::new("/plans", "/pricing", "Old link")],
            vec![ExcludedRoute::new("/dashboard", "Requires sign-in")],
        );

        let full = feed().render_full(&registry);

        assert!(full.contains("- Pricing (/pricing): Plans and licenses.\n"));
        assert!(full.contains("- /pricing (Pricing)\n"));
        assert!(full.contains("- /plans → /pricing: Old link\n"));
        assert!(full.contains("- /dashboard: Requires sign-in\n"));
        assert!(full.contains("## FAQs"));
        assert!(full.contains("## Capabilities"));
    }

    #[test]
    fn output_is_deterministic() {
        let registry = site::registry();

        assert_eq!(feed().render_full(&registry), feed().render_full(&registry));
        assert_eq!(
            feed().render_summary(&registry),
            feed().render_summary(&registry)
        );
    }

    #[test]
    fn writes_both_files() {
        let temp = tempdir().unwrap();

        feed().write(&site::registry(), temp.path()).unwrap();

        let summary = fs::read_to_string(temp.path().join(LLMS_FILE)).unwrap();
        let full = fs::read_to_string(temp.path().join(LLMS_FULL_FILE)).unwrap();
        assert!(summary.contains("High-priority public URLs"));
        assert!(full.contains("Route index"));
    }
}
