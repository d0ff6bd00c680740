use clap::{Parser, Subcommand};
use prolex_core::config::from_file;
use prolex_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// Prolex HTTP Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "PROLEX_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PROLEX_PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server with a specific configuration file
    Config {
        /// Path to the JSON configuration file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    prolex_http::init_tracing(&cli.log_level);

    let config = match &cli.command {
        Some(Commands::Config { file }) => {
            println!("Loading configuration from file: {}", file.display());
            from_file::<ServerConfig, _>(file)?
        }
        None => ServerConfig {
            host: cli.host,
            port: cli.port,
            ..Default::default()
        },
    };

    println!(
        "Starting Prolex HTTP server on {}:{}",
        config.host, config.port
    );
    prolex_http::start_with_config(config).await?;

    Ok(())
}
