//! CLI commands.

mod decode;
mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// refgen - Generate and inspect icbt RefIds.
#[derive(Debug, Parser)]
#[command(name = "refgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a RefId.
    Generate(generate::GenerateCommand),

    /// Decode a RefId.
    Decode(decode::DecodeCommand),
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(format),
            Commands::Decode(cmd) => cmd.run(format),
        }
    }
}
