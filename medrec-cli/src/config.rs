use anyhow::Result;
use clap::{Parser, Subcommand};
use medrec_core::MedrecConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration (password redacted)
    Show,
}

pub fn run_config(args: ConfigArgs, effective: &MedrecConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", MedrecConfig::config_path().display());
        }
        ConfigCommands::Show => {
            print!("{}", effective.to_redacted_toml()?);
        }
    }
    Ok(())
}
