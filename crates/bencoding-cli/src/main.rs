//! `bdecode`: decode a bencoded file and pretty-print it.
//!
//! ## Usage
//!
//! ```sh
//! # Decode from a file
//! bdecode example.torrent
//!
//! # Decode from stdin
//! cat example.torrent | bdecode
//!
//! # Single-line output
//! bdecode --compact example.torrent
//!
//! # Two-space indentation, reject lengths such as `007:`
//! bdecode --indent 2 --strict example.torrent
//! ```
//!
//! On malformed input the tool prints `error: <message>` to stderr and exits
//! with status 1. Diagnostics go to stderr as well and are controlled with
//! `RUST_LOG` (default `warn`).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bencoding::{Decoder, DecoderConfig, DEFAULT_INDENT, DEFAULT_MAX_DEPTH};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bdecode",
    version,
    about = "A decoder of bencoded files.",
    after_help = "If FILE is not given, the data are read from the standard input.\n\
                  The decoded data are printed to the standard output."
)]
struct Cli {
    /// Bencoded input file (reads from stdin if omitted)
    file: Option<String>,

    /// Print everything on a single line
    #[arg(long, conflicts_with = "indent")]
    compact: bool,

    /// Number of spaces per indentation level
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Maximum nesting depth of lists and dictionaries
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject string lengths with leading zeros
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Decode the requested input and return its rendering.
fn run(cli: &Cli) -> Result<String> {
    let config = DecoderConfig::new()
        .with_max_depth(cli.max_depth)
        .with_strict_lengths(cli.strict);
    let decoder = Decoder::with_config(config);

    let mut input = open_input(cli.file.as_deref())?;
    let value = decoder.decode_from(&mut input)?;
    tracing::debug!(kind = %value.kind(), "decoded input");

    let indent = indent_unit(cli);
    Ok(bencoding::pretty_print(&value, &indent))
}

/// The indent unit implied by `--compact` / `--indent`.
fn indent_unit(cli: &Cli) -> String {
    if cli.compact {
        return String::new();
    }
    match cli.indent {
        Some(width) => " ".repeat(width),
        None => DEFAULT_INDENT.to_string(),
    }
}

fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open file: {}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
