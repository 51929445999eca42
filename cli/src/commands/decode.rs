//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Token IDs to decode (comma-separated)
    #[arg(short = 'k', long)]
    pub tokens: String,
}

use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_tokenizer::Tokenizer;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(Path::new(&cmd.tokenizer))?;

    let ids: Vec<u32> = cmd
        .tokens
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    let text = tokenizer.decode(&ids)?;
    println!("{}", text);

    Ok(())
}
