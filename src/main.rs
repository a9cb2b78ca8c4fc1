//! telegraft - Telegram MarkdownV2 escaper and message splitter

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use telegraft::{SAFE_CHUNK_LENGTH, chunk_message_with_limit, escape_markdown_v2};

#[derive(Parser)]
#[command(name = "telegraft")]
#[command(version, about = "Telegram MarkdownV2 escaper and message splitter", long_about = None)]
#[command(after_help = "EXAMPLES:
    telegraft notes.md              Escape and chunk a file
    telegraft --escape-only -       Escape stdin, no chunking
    telegraft --json --max-len 500  Chunk stdin into a JSON array")]
struct Cli {
    /// Input file, or stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Maximum characters per chunk
    #[arg(long, default_value_t = SAFE_CHUNK_LENGTH)]
    max_len: usize,

    /// Print the chunks as a JSON array
    #[arg(long)]
    json: bool,

    /// Skip escaping (input is already MarkdownV2)
    #[arg(long, conflicts_with = "escape_only")]
    no_escape: bool,

    /// Escape only, print a single payload without chunking
    #[arg(long)]
    escape_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = read_input(cli.input.as_deref()).map_err(|e| e.to_string())?;

    let payload = if cli.no_escape {
        input
    } else {
        escape_markdown_v2(&input)
    };

    if cli.escape_only {
        println!("{payload}");
        return Ok(());
    }

    let chunks = chunk_message_with_limit(&payload, cli.max_len);
    if cli.json {
        let rendered = serde_json::to_string_pretty(&chunks).map_err(|e| e.to_string())?;
        println!("{rendered}");
    } else {
        for chunk in &chunks {
            println!("{chunk}");
            println!("---");
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
