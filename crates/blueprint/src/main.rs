//! Blueprint CLI - static generation for the Blueprint marketing site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::config::SiteConfig;

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Sitemap, LLM feeds and prerendered pages for the Blueprint site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write sitemap.xml and robots.txt to the public directory
    Sitemap,

    /// Write llms.txt and llms-full.txt to the public directory
    Llms,

    /// Prerender every public route into the built client output
    Prerender {
        /// HTML template (defaults to <dist>/index.html)
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output directory (defaults to config dist_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run sitemap, llms and prerender in sequence
    Build,

    /// Print the route registry
    Routes,

    /// Print the head tags and markup rendered for one URL
    Render {
        /// URL or path to render, e.g. /pricing?ref=nav
        url: String,
    },

    /// Preview the prerendered site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to config dist_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = SiteConfig::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Sitemap => {
            commands::sitemap::run(&config)?;
        }
        Commands::Llms => {
            commands::llms::run(&config)?;
        }
        Commands::Prerender { template, output } => {
            commands::prerender::run(&config, template, output)?;
        }
        Commands::Build => {
            commands::build::run(&config)?;
        }
        Commands::Routes => {
            commands::routes::run(&config)?;
        }
        Commands::Render { url } => {
            commands::render::run(&config, &url)?;
        }
        Commands::Serve { port, dir, no_open } => {
            let dir = dir.unwrap_or_else(|| config.dist_dir.clone());
            commands::serve::run(port, dir, !no_open).await?;
        }
    }

    Ok(())
}
