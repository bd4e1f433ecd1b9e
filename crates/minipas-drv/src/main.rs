//! minipas - token census for a small Pascal-like language.
//!
//! Scans a source file and reports how many tokens of each kind it
//! contains. The scanner lives in `minipas-lex`; this binary is the thin
//! driver around it: read the file, pull tokens until end of stream,
//! tally, print.

mod census;
mod error;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use minipas_lex::{Scanner, ScannerConfig};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::census::Census;
use crate::error::{DriverError, Result};

/// Token census for minipas source files.
#[derive(Parser, Debug)]
#[command(name = "minipas")]
#[command(version)]
#[command(about = "Scan a minipas source file and print a token census")]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Also recognize (* ... *) comments
    #[arg(long)]
    paren_comments: bool,

    /// Print every token before the census
    #[arg(long)]
    dump_tokens: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let source = fs::read_to_string(&cli.file).map_err(|e| DriverError::ReadInput {
        path: cli.file.clone(),
        source: e,
    })?;
    debug!(file = %cli.file.display(), bytes = source.len(), "scanning");

    let config = ScannerConfig {
        paren_comments: cli.paren_comments,
    };

    let mut census = Census::default();
    for token in Scanner::with_config(source.chars(), config) {
        if cli.dump_tokens {
            println!("{:<17} {}", token.kind, token.lexeme);
        }
        census.record(token.kind);
    }
    debug!(tokens = census.total(), "scan complete");

    print!("{census}");
    Ok(())
}

/// Installs the tracing subscriber on stderr.
///
/// Defaults to `info`; `--verbose` raises it to `debug` and `RUST_LOG`
/// overrides both. Diagnostics must stay off stdout, which carries only
/// the token dump and the census.
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}
