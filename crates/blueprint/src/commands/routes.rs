//! Print the route registry.

use anyhow::Result;

use super::config::SiteConfig;

/// Run the routes command.
pub fn run(config: &SiteConfig) -> Result<()> {
    let registry = config.registry()?;

    println!("Routes ({}):", registry.routes().len());
    for route in registry.routes() {
        println!(
            "  {:<28} {:.1}  {:<8} {}",
            route.path, route.priority, route.change_frequency, route.label
        );
    }

    if !registry.aliases().is_empty() {
        println!("\nAliases:");
        for alias in registry.aliases() {
            println!("  {:<28} -> {}", alias.path, alias.alias_for);
        }
    }

    if !registry.excluded().is_empty() {
        println!("\nExcluded:");
        for excluded in registry.excluded() {
            println!("  {:<28} {}", excluded.path, excluded.reason);
        }
    }

    Ok(())
}
