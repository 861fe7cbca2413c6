//! Fileenv - launch a program with secrets materialized from files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fileenv::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("FILEENV_LOG").unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("fileenv=debug")
        } else {
            EnvFilter::new("fileenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
