//! CLI Module
//!
//! Command-line interface over the effect schema and grid engine.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FxGrid Schema Tool - effect schema and preset payload inspector
#[derive(Parser, Debug)]
#[command(name = "fxgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List effect types, filtered by placement rules
    #[command(name = "effects")]
    Effects {
        /// Placement context: single, input, track, or input-track
        #[arg(short, long, default_value = "single")]
        placement: String,

        /// Bank being edited
        #[arg(short, long, default_value = "A")]
        bank: String,
    },

    /// Show the resolved parameter list for an effect type
    #[command(name = "params")]
    Params {
        /// Effect type name, e.g. "LPF" or "STEP SLICER"
        effect: String,
    },

    /// Decode a legacy payload file and summarize its records
    #[command(name = "inspect")]
    Inspect {
        /// Path to the payload JSON
        file: PathBuf,
    },

    /// Re-encode a legacy payload in canonical form
    #[command(name = "normalize")]
    Normalize {
        /// Path to the payload JSON
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
