//! FxGrid CLI - Effect Schema Tool
//!
//! Command-line inspector for the effect schema and preset payloads.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use fxgrid::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("FxGrid Schema Tool v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("FxGrid Schema Tool v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Effects { placement, bank } => {
            fxgrid::cli::commands::list_effects(&placement, &bank)
        }
        Commands::Params { effect } => fxgrid::cli::commands::show_params(&effect),
        Commands::Inspect { file } => fxgrid::cli::commands::inspect(&file),
        Commands::Normalize { file, output } => {
            fxgrid::cli::commands::normalize(&file, output.as_deref())
        }
    }
}
