//! Shorts-Scout main entry point
//!
//! This is the command-line interface for the Shorts-Scout endpoint.

use anyhow::Context;
use clap::{Parser, Subcommand};
use shorts_scout::config::load_config_or_default;
use shorts_scout::server::{self, ErrorResponse, Outcome, ShortsResponse, ShortsService, CONSENT_MESSAGE};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shorts-Scout: a homepage shorts scraper
///
/// Fetches the target homepage, extracts the embedded bootstrap data and
/// reports every short-form video entry found in it.
#[derive(Parser, Debug)]
#[command(name = "shorts-scout")]
#[command(version)]
#[command(about = "A homepage shorts scraper", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP endpoint
    Serve {
        /// Path to TOML configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Override the listen address from the configuration
        #[arg(short, long, value_name = "ADDR")]
        listen: Option<String>,
    },

    /// Run a single scan and print the JSON payload
    Scan {
        /// Path to TOML configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Netscape cookies.txt file to send with the request
        #[arg(long, value_name = "FILE")]
        cookies: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Serve { config, listen } => handle_serve(config, listen).await,
        Command::Scan { config, cookies } => handle_scan(config, cookies).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shorts_scout=info,warn"),
            1 => EnvFilter::new("shorts_scout=debug,info"),
            2 => EnvFilter::new("shorts_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_serve(config: Option<PathBuf>, listen: Option<String>) -> anyhow::Result<()> {
    let mut config =
        load_config_or_default(config.as_deref()).context("Failed to load configuration")?;

    if let Some(listen) = listen {
        config.server.listen_addr = listen;
        shorts_scout::config::validate(&config).context("Invalid --listen address")?;
    }

    tracing::info!(
        "Target {} ({:?} locator, max {} redirects)",
        config.fetch.target_url,
        config.extract.locator,
        config.fetch.max_redirects
    );

    server::serve(config).await.context("Server failed")
}

/// Prints the same payload the endpoint would return
async fn handle_scan(config: Option<PathBuf>, cookies: Option<PathBuf>) -> anyhow::Result<()> {
    let config =
        load_config_or_default(config.as_deref()).context("Failed to load configuration")?;

    let cookies_content = match cookies {
        Some(path) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read cookies from {}", path.display()))?,
        ),
        None => None,
    };

    let service = ShortsService::new(config).context("Failed to initialize scanner")?;
    tracing::info!(
        "Scanning {} (cookies: {})",
        service.config().fetch.target_url,
        cookies_content.is_some()
    );

    let payload = match service.scan(cookies_content.as_deref()).await {
        Ok(Outcome::Items(items)) => serde_json::to_string_pretty(&ShortsResponse::new(items))?,
        Ok(Outcome::ConsentWall) => {
            serde_json::to_string_pretty(&ErrorResponse::new(CONSENT_MESSAGE))?
        }
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", payload);
    Ok(())
}
