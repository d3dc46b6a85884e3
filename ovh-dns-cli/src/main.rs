//! `ovh-dns`: manage OVHcloud DNS zones from the command line.
//!
//! Credentials are read from `~/.ovh.conf` (created by `ovh-dns setup`) and the
//! `OVH_*` environment variables.

mod args;
mod commands;
mod console;
mod error;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use args::Cli;
use console::Console;

/// Log to stderr. `RUST_LOG` overrides the level picked from `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    match commands::execute(cli.command, &mut console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            // Nowhere left to report to if stderr itself is gone.
            if let Err(write_err) = e.report(&mut io::stderr()) {
                tracing::debug!(error = %write_err, "Cannot write error report");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;
