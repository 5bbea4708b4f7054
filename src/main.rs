//! Dockmate - interactive console for a Docker-compatible container daemon.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dockmate::{client, menu};

/// Dockmate - interactive console for a Docker-compatible container daemon
#[derive(Parser)]
#[command(name = "dockmate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Unix socket path for daemon connection
    ///
    /// Can also be set via DOCKMATE_SOCKET or DOCKER_HOST environment
    /// variables.
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    let filter = if cli.debug {
        "dockmate=debug"
    } else {
        "dockmate=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // A connect failure here is the only fatal path: print the diagnostic
    // and exit non-zero. Everything past this point recovers in the loop.
    let daemon = client::connect(cli.socket).await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    menu::run(&daemon, &mut input, &mut output).await?;

    Ok(())
}
