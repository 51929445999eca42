//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to encode ("-" reads from stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_tokenizer::Tokenizer;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(Path::new(&cmd.tokenizer))?;

    let input_text = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let ids = tokenizer.encode(&input_text);

    let ids_str: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let output = ids_str.join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", ids.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
