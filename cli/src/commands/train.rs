//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: String,

    /// Target vocabulary size
    #[arg(short, long, default_value_t = 276)]
    pub vocab_size: usize,
}

use anyhow::Result as AnyhowResult;
use std::fs;
use std::path::Path;
use std::time::Instant;
use subtok_tokenizer::Tokenizer;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training tokenizer...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Vocab size: {}", cmd.vocab_size);
    println!();

    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)?;
    println!(
        "Read {} bytes in {:.2}s",
        data.len(),
        start.elapsed().as_secs_f64()
    );

    let mut tokenizer = Tokenizer::builder().vocab_size(cmd.vocab_size).build();

    let start = Instant::now();
    tokenizer.train(&data)?;
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("Learned merges: {}", tokenizer.merge_count());
    println!("Final vocab size: {}", tokenizer.vocab_size());

    let requested = cmd.vocab_size.saturating_sub(256);
    if tokenizer.merge_count() < requested {
        println!(
            "Note: corpus exhausted after {} of {} requested merges",
            tokenizer.merge_count(),
            requested
        );
    }

    let output_path = Path::new(&cmd.output);
    tokenizer.save(output_path)?;
    println!("Model saved to {}", cmd.output);

    Ok(())
}
