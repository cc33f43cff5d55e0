//! Config inspection commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todoctl_core::TodoConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config (file + environment) as TOML
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", TodoConfig::config_path().display());
        }
        ConfigCommands::Show => {
            let config = TodoConfig::load().context("Failed to load todoctl config")?;
            let rendered = config
                .to_toml_string()
                .context("Failed to render config")?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
