//! Inspect command implementation.

use clap::Parser;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Maximum number of merges to list
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_tokenizer::Tokenizer;

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(Path::new(&cmd.tokenizer))?;

    println!("Vocab size: {}", tokenizer.vocab_size());
    println!("Merges: {}", tokenizer.merge_count());
    println!();

    for rule in tokenizer.merges().iter().take(cmd.limit) {
        let expansion = tokenizer
            .vocab()
            .get(rule.new_id)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default();
        println!(
            "  ({}, {}) -> {}  {:?}",
            rule.pair.0, rule.pair.1, rule.new_id, expansion
        );
    }

    if tokenizer.merge_count() > cmd.limit {
        println!("  ... {} more", tokenizer.merge_count() - cmd.limit);
    }

    Ok(())
}
