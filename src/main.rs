//! BADSEC user-list CLI.
//!
//! Fetches the checksum-protected user list from a BADSEC server and
//! prints it to stdout as a JSON array. Exits 0 on success, 1 once either
//! request has exhausted its retries. All logs go to stderr so stdout
//! stays machine-readable.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use noclist::ClientConfig;

#[derive(Parser)]
#[command(name = "noclist")]
#[command(about = "Print the user list from a BADSEC server as JSON", long_about = None)]
struct Cli {
    /// Log diagnostic detail to stderr.
    #[arg(short = 'v')]
    verbose: bool,

    /// Base URL of the BADSEC server, e.g. http://localhost:8888.
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "noclist=debug"
    } else {
        "noclist=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // A missing URL is a usage query, not an error.
    let Some(url) = cli.server_url else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    match noclist::run(&url, &ClientConfig::default()).await {
        Ok(payload) => {
            println!("{payload}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "noclist failed");
            ExitCode::FAILURE
        }
    }
}
