//! Taxa - archive, category and tag pages from markdown front matter.

mod build;
mod cli;
mod config;
mod content;
mod data;
mod generator;
mod logger;
mod utils;

use anyhow::{Result, bail};
use build::{build_site, check_site, counts_json};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { clean } => build_site(&config, *clean),
        Commands::Check { json: true } => {
            if let Some(json) = counts_json(&config)? {
                println!("{json}");
            }
            Ok(())
        }
        Commands::Check { json: false } => {
            let report = check_site(&config)?;
            if !report.is_clean() {
                bail!(
                    "{} generated pages are out of date, run `taxa build`",
                    report.stale.len() + report.missing.len()
                );
            }
            Ok(())
        }
    }
}

/// Load, override and validate configuration. A missing config file means defaults.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    logger::set_debug(config.debug);
    Ok(config)
}
