//! Subtok CLI - Command-line interface for the BPE tokenizer.
//!
//! This is the main entry point for the `subtok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, InspectCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "subtok")]
#[command(about = "A byte-pair encoding tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from text data
    Train(TrainCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Show details of a trained tokenizer
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
    }

    Ok(())
}
