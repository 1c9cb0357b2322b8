//! Parses a chat message from the command line or stdin and prints the
//! arguments and flags as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use message_lexer::{MessageParser, ParserOptions};

#[derive(Parser, Debug)]
#[command(
    name = "message-parser",
    version,
    about = "Split a chat message into arguments and flags"
)]
struct Cli {
    /// Message text. Joined with single spaces; read from stdin when omitted.
    /// Everything after the first word belongs to the message.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,

    /// JSON file with marker overrides, e.g.
    /// `{"markers": {"contentMarkers": [{"start": "<br />", "group": "Newline"}]}}`.
    #[arg(long, value_name = "FILE")]
    markers: Option<PathBuf>,

    /// Print the result on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when the message itself failed to parse.
fn run(cli: &Cli) -> Result<bool> {
    let parser = match &cli.markers {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let options = ParserOptions::from_json(&json)
                .with_context(|| format!("invalid marker options in {}", path.display()))?;
            MessageParser::with_options(&options).context("invalid marker")?
        }
        None => MessageParser::new(),
    };

    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        cli.text.join(" ")
    };
    debug!("parsing {} bytes", text.len());

    match parser.parse(&text) {
        Ok(result) => {
            let json = if cli.compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{json}");
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            Ok(false)
        }
    }
}
