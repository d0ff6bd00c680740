use clap::Parser;
use prolex_core::{
    analyze,
    report::{OutputFormat, render},
};
use std::{io::Read, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Classify Prolog source into lexical tokens
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to analyze (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_source(cli: &Cli) -> std::io::Result<String> {
    match &cli.file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(cli)?;
    debug!("read {} bytes of source", source.len());

    let tokens = analyze(&source)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    print!("{}", render(&tokens, format)?);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
